//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Each flag is further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit every detected swing low and the selected support points.
    pub print_swing_lows: bool,
    /// Emit fitted parameters and r2 after each strategy run.
    pub print_fit_params: bool,
    /// Emit details while loading and validating series files.
    pub print_series_load: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_swing_lows: false,
    print_fit_params: false,
    print_series_load: false,
};
