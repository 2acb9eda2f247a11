//! Power-law, exponential and logarithmic floors.
//!
//! Each one maps the support points into a space where the model is a straight
//! line, fits that line by least squares, then evaluates the model at every
//! series point. r2 is reported in the linearised space.

use crate::domain::{PricePoint, SwingLow};
use crate::models::{CurvePoint, FitParams, FitResult};
use crate::utils::maths_utils::linear_regression;

use super::{series_day_offsets, support_day_offsets};

/// `low ≈ a * (days + 1)^b`, fitted as `ln(low)` against `ln(days + 1)`.
pub fn power_law(support_points: &[SwingLow], series: &[PricePoint]) -> FitResult {
    let xs: Vec<f64> = support_day_offsets(support_points, series)
        .into_iter()
        .map(|d| (d + 1.0).ln())
        .collect();
    let ys: Vec<f64> = support_points.iter().map(|s| s.low.ln()).collect();

    let fit = linear_regression(&xs, &ys);
    let a = fit.intercept.exp();
    let b = fit.slope;

    FitResult {
        curve: evaluate(series, |d| a * (d + 1.0).powf(b)),
        params: FitParams::PowerLaw { a, b },
        r2: Some(fit.r2),
        name: "Power Law".to_string(),
    }
}

/// `low ≈ a * e^(b * days)`, fitted as `ln(low)` against `days`.
pub fn exponential(support_points: &[SwingLow], series: &[PricePoint]) -> FitResult {
    let xs = support_day_offsets(support_points, series);
    let ys: Vec<f64> = support_points.iter().map(|s| s.low.ln()).collect();

    let fit = linear_regression(&xs, &ys);
    let a = fit.intercept.exp();
    let b = fit.slope;

    FitResult {
        curve: evaluate(series, |d| a * (b * d).exp()),
        params: FitParams::Exponential { a, b },
        r2: Some(fit.r2),
        name: "Exponential".to_string(),
    }
}

/// `low ≈ a + b * ln(days + 1)`, fitted as `low` against `ln(days + 1)`.
pub fn logarithmic(support_points: &[SwingLow], series: &[PricePoint]) -> FitResult {
    let xs: Vec<f64> = support_day_offsets(support_points, series)
        .into_iter()
        .map(|d| (d + 1.0).ln())
        .collect();
    let ys: Vec<f64> = support_points.iter().map(|s| s.low).collect();

    let fit = linear_regression(&xs, &ys);
    let a = fit.intercept;
    let b = fit.slope;

    FitResult {
        curve: evaluate(series, |d| a + b * (d + 1.0).ln()),
        params: FitParams::Logarithmic { a, b },
        r2: Some(fit.r2),
        name: "Logarithmic".to_string(),
    }
}

fn evaluate(series: &[PricePoint], model: impl Fn(f64) -> f64) -> Vec<CurvePoint> {
    series
        .iter()
        .zip(series_day_offsets(series))
        .map(|(point, days)| CurvePoint {
            time: point.time,
            value: model(days),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    const REL_TOL: f64 = 1e-6;

    fn rel_close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= REL_TOL * expected.abs().max(1e-12)
    }

    /// Daily series whose low at day `d` is `model(d)`.
    fn series_from_model(days: usize, model: impl Fn(f64) -> f64) -> Vec<PricePoint> {
        let start = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        (0..days)
            .map(|d| {
                let low = model(d as f64);
                PricePoint::new(start + Days::new(d as u64), low, low * 1.1, low, low)
            })
            .collect()
    }

    fn supports_at(series: &[PricePoint], indices: &[usize]) -> Vec<SwingLow> {
        indices
            .iter()
            .map(|&index| SwingLow {
                index,
                time: series[index].time,
                low: series[index].low,
            })
            .collect()
    }

    #[test]
    fn power_law_recovers_known_parameters() {
        let (a, b) = (3.5, 0.75);
        let series = series_from_model(400, |d| a * (d + 1.0).powf(b));
        let supports = supports_at(&series, &[0, 37, 120, 250, 399]);

        let result = power_law(&supports, &series);
        let FitParams::PowerLaw { a: fit_a, b: fit_b } = result.params else {
            panic!("wrong params variant");
        };
        assert!(rel_close(fit_a, a));
        assert!(rel_close(fit_b, b));
        assert!(rel_close(result.r2.unwrap(), 1.0));
        assert_eq!(result.curve.len(), series.len());
        assert!(rel_close(result.curve[200].value, series[200].low));
    }

    #[test]
    fn exponential_recovers_known_parameters() {
        let (a, b) = (250.0, 0.0015);
        let series = series_from_model(1000, |d| a * (b * d).exp());
        let supports = supports_at(&series, &[10, 300, 640, 999]);

        let result = exponential(&supports, &series);
        let FitParams::Exponential { a: fit_a, b: fit_b } = result.params else {
            panic!("wrong params variant");
        };
        assert!(rel_close(fit_a, a));
        assert!(rel_close(fit_b, b));
        assert!(rel_close(result.r2.unwrap(), 1.0));
        assert!(rel_close(result.curve[0].value, a));
    }

    #[test]
    fn logarithmic_recovers_known_parameters() {
        let (a, b) = (40.0, 12.0);
        let series = series_from_model(500, |d| a + b * (d + 1.0).ln());
        let supports = supports_at(&series, &[3, 90, 260, 480]);

        let result = logarithmic(&supports, &series);
        let FitParams::Logarithmic { a: fit_a, b: fit_b } = result.params else {
            panic!("wrong params variant");
        };
        assert!(rel_close(fit_a, a));
        assert!(rel_close(fit_b, b));
        assert!(rel_close(result.r2.unwrap(), 1.0));
        // ln(0 + 1) = 0, so the first value is the intercept
        assert!(rel_close(result.curve[0].value, a));
    }

    #[test]
    fn noisy_supports_give_r2_below_one() {
        let series = series_from_model(100, |d| 10.0 + d);
        let mut supports = supports_at(&series, &[5, 30, 60, 90]);
        supports[1].low *= 1.2;
        supports[2].low *= 0.9;
        let r2 = power_law(&supports, &series).r2.unwrap();
        assert!(r2 < 1.0);
    }

    #[test]
    fn fewer_than_two_supports_is_degenerate() {
        let series = series_from_model(30, |d| 100.0 + d);

        for supports in [Vec::new(), supports_at(&series, &[12])] {
            let result = power_law(&supports, &series);
            assert_eq!(result.params, FitParams::PowerLaw { a: 1.0, b: 0.0 });
            assert_eq!(result.r2, Some(0.0));
            assert!(result.curve.iter().all(|p| p.value == 1.0));

            let result = exponential(&supports, &series);
            assert_eq!(result.params, FitParams::Exponential { a: 1.0, b: 0.0 });
            assert!(result.curve.iter().all(|p| p.value == 1.0));

            let result = logarithmic(&supports, &series);
            assert_eq!(result.params, FitParams::Logarithmic { a: 0.0, b: 0.0 });
            assert!(result.curve.iter().all(|p| p.value == 0.0));
        }
    }

    #[test]
    fn non_positive_lows_propagate_nan() {
        let series = series_from_model(10, |d| 5.0 + d);
        let mut supports = supports_at(&series, &[2, 5, 8]);
        supports[1].low = -1.0;
        let result = power_law(&supports, &series);
        assert!(result.curve.iter().all(|p| p.value.is_nan()));
        assert!(result.display_curve().is_empty());
    }
}
