use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One evaluated point of a fitted curve, aligned with a series point.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub time: NaiveDate,
    /// Not filtered: may be negative or non-finite for some inputs
    pub value: f64,
}

/// Fitted parameters, one variant per strategy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FitParams {
    /// `value = a * (days + 1)^b`
    PowerLaw { a: f64, b: f64 },
    /// `value = a * e^(b * days)`
    Exponential { a: f64, b: f64 },
    /// `value = a + b * ln(days + 1)`
    Logarithmic { a: f64, b: f64 },
    /// `value = max(0, Σ coefficients[j] * x^j)` with `x = days / max_days`
    Polynomial {
        degree: usize,
        coefficients: Vec<f64>,
    },
    GeometricEnvelope { window_size: usize, multiplier: f64 },
    PercentileEnvelope { window_size: usize, percentile: f64 },
}

/// Output of one strategy run. Owned outright by the caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FitResult {
    /// One point per input series point, same order
    pub curve: Vec<CurvePoint>,
    pub params: FitParams,
    /// `None` for the envelopes, where goodness of fit does not apply
    pub r2: Option<f64>,
    pub name: String,
}

impl FitResult {
    /// Curve points fit for plotting: finite and strictly positive values only.
    pub fn display_curve(&self) -> Vec<CurvePoint> {
        self.curve
            .iter()
            .filter(|point| point.value.is_finite() && point.value > 0.0)
            .copied()
            .collect()
    }
}
