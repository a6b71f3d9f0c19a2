//! Statistics kernel
//!
//! Closed-form ordinary least squares over paired samples.

use decomposition_spi::LinearFit;

/// True when `value` is zero up to rounding relative to `scale`.
///
/// For differences of large sums such as `nΣx² − (Σx)²`, where cancellation
/// leaves an error linear in epsilon.
pub(crate) fn is_negligible(value: f64, scale: f64) -> bool {
    value.abs() <= f64::EPSILON * scale.abs().max(f64::MIN_POSITIVE) * 4.0
}

/// True when a mean squared deviation over `n` samples is indistinguishable
/// from zero for data of the given `magnitude` (mean absolute value).
///
/// A summed mean drifts by up to `n·ε·magnitude`, and deviations about it
/// carry that error squared.
pub(crate) fn is_flat(mean_square_deviation: f64, magnitude: f64, n: usize) -> bool {
    mean_square_deviation <= (f64::EPSILON * magnitude * n as f64).powi(2)
}

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Fit `y = intercept + slope * x` by ordinary least squares.
///
/// Degenerate inputs never yield NaN:
/// - empty input gives slope, intercept and R² of 0;
/// - identical `x` values give slope 0 and the mean of `y` as intercept;
/// - identical `y` values give R² of 0.
///
/// Only the common prefix of `x` and `y` is used.
pub fn linear_regression(x: &[f64], y: &[f64]) -> LinearFit {
    debug_assert_eq!(x.len(), y.len(), "regression inputs must be paired");
    let n = x.len().min(y.len());
    if n == 0 {
        return LinearFit::default();
    }
    let (x, y) = (&x[..n], &y[..n]);
    let nf = n as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_abs_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        sum_x += xi;
        sum_y += yi;
        sum_xy += xi * yi;
        sum_xx += xi * xi;
        sum_abs_y += yi.abs();
    }

    let denominator = nf * sum_xx - sum_x * sum_x;
    let slope = if is_negligible(denominator, nf * sum_xx) {
        0.0
    } else {
        (nf * sum_xy - sum_x * sum_y) / denominator
    };
    let intercept = (sum_y - slope * sum_x) / nf;

    let mean_y = sum_y / nf;
    let (ss_res, ss_tot) = x
        .iter()
        .zip(y)
        .fold((0.0, 0.0), |(res, tot), (&xi, &yi)| {
            let predicted = intercept + slope * xi;
            (res + (yi - predicted).powi(2), tot + (yi - mean_y).powi(2))
        });

    let r_squared = if is_flat(ss_tot / nf, sum_abs_y / nf, n) {
        0.0
    } else {
        1.0 - ss_res / ss_tot
    };

    LinearFit::new(slope, intercept, r_squared)
}
