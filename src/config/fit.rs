//! Curve-fitting configuration

use serde::{Deserialize, Serialize};

use crate::strategies::Strategy;

/// Settings for the rolling envelope strategies
pub struct EnvelopeDefaults {
    // Trailing window length in series points (52 = one year of weekly data)
    pub rolling_window_size: usize,
    // Rank fraction for the percentile envelope (0.03 on a 52 window picks the 2nd lowest)
    pub percentile_fraction: f64,
    // Pulls the rolling geometric mean down towards a floor
    pub geometric_multiplier: f64,
}

/// The Master Fit Configuration
pub struct FitDefaults {
    // How many of the lowest swing lows feed the regressions
    pub support_point_count: usize,
    pub strategy: Strategy,
    pub polynomial_degree: usize,

    // Sub-groups
    pub envelope: EnvelopeDefaults,
}

pub const FIT_DEFAULTS: FitDefaults = FitDefaults {
    support_point_count: 10,
    strategy: Strategy::PowerLaw,
    polynomial_degree: 3,

    envelope: EnvelopeDefaults {
        rolling_window_size: 52,
        percentile_fraction: 0.03,
        geometric_multiplier: 0.85,
    },
};

/// Read-only settings snapshot handed to the curve strategies on every call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FitConfig {
    pub support_point_count: usize,
    pub strategy: Strategy,
    /// Clamped to at least 1 by the polynomial strategy
    pub polynomial_degree: usize,
    /// Expected in [0, 1]
    pub percentile_fraction: f64,
    /// Clamped to at least 1 by the envelope strategies
    pub rolling_window_size: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            support_point_count: FIT_DEFAULTS.support_point_count,
            strategy: FIT_DEFAULTS.strategy,
            polynomial_degree: FIT_DEFAULTS.polynomial_degree,
            percentile_fraction: FIT_DEFAULTS.envelope.percentile_fraction,
            rolling_window_size: FIT_DEFAULTS.envelope.rolling_window_size,
        }
    }
}
