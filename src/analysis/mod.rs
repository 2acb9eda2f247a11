// Swing-low detection and support-point selection
pub mod support_points;
pub mod swing_lows;

// Re-export commonly used functions
pub use support_points::select_lowest;
pub use swing_lows::detect_swing_lows;
