//! Small numeric kernel shared by the curve strategies.
//!
//! Everything here is total: degenerate inputs map to defined numbers
//! (zeros, or an r2 of 0) instead of errors or panics.

use argminmax::ArgMinMax;

/// Result of an ordinary least-squares line fit `y = slope * x + intercept`.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination of the fit on its own inputs.
    pub r2: f64,
}

impl LinearFit {
    /// Fallback used for fewer than two points (or all-identical x).
    pub const DEGENERATE: LinearFit = LinearFit {
        slope: 0.0,
        intercept: 0.0,
        r2: 0.0,
    };
}

/// Closed-form simple linear regression over paired samples.
///
/// Uses the running sums of x, y, xy and x². Fewer than two pairs, or a zero
/// denominator (every x identical), yields [`LinearFit::DEGENERATE`].
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> LinearFit {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len().min(ys.len());
    if n < 2 {
        return LinearFit::DEGENERATE;
    }

    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let n_f = n as f64;
    let denominator = n_f * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return LinearFit::DEGENERATE;
    }

    let slope = (n_f * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n_f;

    let predicted: Vec<f64> = xs[..n].iter().map(|&x| slope * x + intercept).collect();
    LinearFit {
        slope,
        intercept,
        r2: r_squared(&ys[..n], &predicted),
    }
}

/// `1 - SS_res / SS_tot`, defined as 0 when the actual values have no variance.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    debug_assert_eq!(actual.len(), predicted.len());
    if actual.is_empty() {
        return 0.0;
    }
    let mean = actual.iter().sum::<f64>() / actual.len() as f64;

    let ss_tot: f64 = actual.iter().map(|y| (y - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        return 0.0;
    }
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(y, y_hat)| (y - y_hat).powi(2))
        .sum();

    1.0 - ss_res / ss_tot
}

/// Solves `A x = b` by Gaussian elimination with partial pivoting.
///
/// The pivot for each column is the first row holding the largest absolute
/// entry. A pivot that is still exactly zero marks a singular column: its
/// elimination step is skipped and its unknown is returned as 0.
pub fn solve_linear_system(a: &[Vec<f64>], b: &[f64]) -> Vec<f64> {
    let n = b.len();
    debug_assert_eq!(a.len(), n);

    // Augmented matrix [A | b]
    let mut aug: Vec<Vec<f64>> = a
        .iter()
        .zip(b.iter())
        .map(|(row, &rhs)| {
            let mut augmented_row = row.clone();
            augmented_row.resize(n, 0.0);
            augmented_row.push(rhs);
            augmented_row
        })
        .collect();

    for col in 0..n {
        let mut pivot_row = col;
        for row in (col + 1)..n {
            if aug[row][col].abs() > aug[pivot_row][col].abs() {
                pivot_row = row;
            }
        }
        aug.swap(col, pivot_row);

        let pivot = aug[col][col];
        if pivot == 0.0 {
            continue;
        }

        for row in (col + 1)..n {
            let factor = aug[row][col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..=n {
                let delta = factor * aug[col][k];
                aug[row][k] -= delta;
            }
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let pivot = aug[i][i];
        if pivot == 0.0 {
            continue;
        }
        let tail: f64 = ((i + 1)..n).map(|j| aug[i][j] * x[j]).sum();
        x[i] = (aug[i][n] - tail) / pivot;
    }
    x
}

/// Builds `(XᵗX, Xᵗy)` for the least-squares problem with design matrix `X`
/// (one row per sample).
pub fn build_normal_equations(design: &[Vec<f64>], y: &[f64]) -> (Vec<Vec<f64>>, Vec<f64>) {
    let k = design.first().map_or(0, Vec::len);
    let mut xtx = vec![vec![0.0; k]; k];
    let mut xty = vec![0.0; k];

    for (row, &target) in design.iter().zip(y.iter()) {
        for i in 0..k {
            xty[i] += row[i] * target;
            for j in 0..k {
                xtx[i][j] += row[i] * row[j];
            }
        }
    }
    (xtx, xty)
}

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}
