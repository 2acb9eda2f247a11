// Domain types and value objects
pub mod price_point;
pub mod swing_low;

// Re-export commonly used types
pub use price_point::PricePoint;
pub use swing_low::SwingLow;
