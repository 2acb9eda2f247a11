//! Rolling envelopes over the full series lows.
//!
//! Both use a trailing window `[max(0, i - w + 1), i]`, ignore support points
//! and report no r2.

use statrs::statistics::Statistics;

use crate::config::FIT_DEFAULTS;
use crate::domain::PricePoint;
use crate::models::{CurvePoint, FitParams, FitResult};

/// `exp(mean(ln(low))) * 0.85` over each trailing window.
///
/// Lows must be positive; a non-positive low poisons every window containing it.
pub fn geometric_envelope(series: &[PricePoint], window_size: usize) -> FitResult {
    let window_size = window_size.max(1);
    let multiplier = FIT_DEFAULTS.envelope.geometric_multiplier;

    let curve = rolling(series, window_size, |window| {
        window.iter().map(|p| p.low.ln()).mean().exp() * multiplier
    });

    FitResult {
        curve,
        params: FitParams::GeometricEnvelope {
            window_size,
            multiplier,
        },
        r2: None,
        name: "Geometric Mean Envelope".to_string(),
    }
}

/// Rank pick from each sorted trailing window at `floor(len * percentile)`.
///
/// No interpolation between ranks. The rank is clamped into the window, so a
/// percentile of 1 selects the window maximum.
pub fn percentile_envelope(series: &[PricePoint], window_size: usize, percentile: f64) -> FitResult {
    let window_size = window_size.max(1);

    let curve = rolling(series, window_size, |window| {
        let mut lows: Vec<f64> = window.iter().map(|p| p.low).collect();
        lows.sort_by(f64::total_cmp);
        lows[rank_index(lows.len(), percentile)]
    });

    FitResult {
        curve,
        params: FitParams::PercentileEnvelope {
            window_size,
            percentile,
        },
        r2: None,
        name: "Percentile Envelope".to_string(),
    }
}

fn rank_index(len: usize, percentile: f64) -> usize {
    let raw = (len as f64 * percentile).floor();
    if raw.is_nan() || raw < 0.0 {
        return 0;
    }
    (raw as usize).min(len.saturating_sub(1))
}

fn rolling(
    series: &[PricePoint],
    window_size: usize,
    statistic: impl Fn(&[PricePoint]) -> f64,
) -> Vec<CurvePoint> {
    series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let start = (i + 1).saturating_sub(window_size);
            CurvePoint {
                time: point.time,
                value: statistic(&series[start..=i]),
            }
        })
        .collect()
}
