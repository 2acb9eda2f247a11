use crate::domain::{PricePoint, SwingLow};
use crate::models::{CurvePoint, FitParams, FitResult};
use crate::utils::maths_utils::{build_normal_equations, r_squared, solve_linear_system};

use super::{series_day_offsets, support_day_offsets};

/// Least-squares polynomial of `degree` through the support lows, in price space.
///
/// Time is normalised to `x = days / max_days` over the full series. A series
/// spanning zero days maps every x to 0. Curve values are clamped at 0; r2 is
/// measured on the support points against the unclamped polynomial.
pub fn polynomial(support_points: &[SwingLow], series: &[PricePoint], degree: usize) -> FitResult {
    let degree = degree.max(1);

    let series_days = series_day_offsets(series);
    let max_days = series_days.last().copied().unwrap_or(0.0);
    let normalise = |d: f64| if max_days > 0.0 { d / max_days } else { 0.0 };

    let xs: Vec<f64> = support_day_offsets(support_points, series)
        .into_iter()
        .map(normalise)
        .collect();
    let ys: Vec<f64> = support_points.iter().map(|s| s.low).collect();

    // Vandermonde rows [1, x, x², ..., x^degree]
    let design: Vec<Vec<f64>> = xs.iter().map(|&x| powers(x, degree)).collect();
    let coefficients = if design.is_empty() {
        vec![0.0; degree + 1]
    } else {
        let (xtx, xty) = build_normal_equations(&design, &ys);
        solve_linear_system(&xtx, &xty)
    };

    let predicted: Vec<f64> = xs.iter().map(|&x| horner(&coefficients, x)).collect();
    let r2 = r_squared(&ys, &predicted);

    let curve = series
        .iter()
        .zip(series_days)
        .map(|(point, days)| CurvePoint {
            time: point.time,
            value: horner(&coefficients, normalise(days)).max(0.0),
        })
        .collect();

    FitResult {
        curve,
        params: FitParams::Polynomial {
            degree,
            coefficients,
        },
        r2: Some(r2),
        name: format!("Polynomial (degree {})", degree),
    }
}

fn powers(x: f64, degree: usize) -> Vec<f64> {
    std::iter::successors(Some(1.0), |p| Some(p * x))
        .take(degree + 1)
        .collect()
}

/// Evaluates `Σ coefficients[j] * x^j`.
fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
