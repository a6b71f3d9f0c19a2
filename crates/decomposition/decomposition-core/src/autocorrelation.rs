//! Sample autocorrelation function
//!
//! Uses the biased estimator: both the lag covariance and the variance are
//! normalised by `n`, which keeps every correlation inside `[-1, 1]`.

use crate::stats::{is_flat, mean};
use decomposition_spi::AcfEntry;

/// Default number of lags reported
pub const DEFAULT_MAX_LAG: usize = 30;

/// Autocorrelation for lags `0..=min(max_lag, n - 1)`.
///
/// A flat series reports 0 at every lag, lag 0 included. An empty series
/// yields no entries.
pub fn calculate_acf(values: &[f64], max_lag: usize) -> Vec<AcfEntry> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mu = mean(values);
    let deviations: Vec<f64> = values.iter().map(|v| v - mu).collect();
    let variance = deviations.iter().map(|d| d * d).sum::<f64>() / n as f64;
    let magnitude = values.iter().map(|v| v.abs()).sum::<f64>() / n as f64;
    let flat = is_flat(variance, magnitude, n);

    (0..=max_lag.min(n - 1))
        .map(|lag| {
            if flat {
                return AcfEntry::new(lag, 0.0);
            }
            let covariance = deviations
                .iter()
                .zip(&deviations[lag..])
                .map(|(a, b)| a * b)
                .sum::<f64>()
                / n as f64;
            AcfEntry::new(lag, (covariance / variance).clamp(-1.0, 1.0))
        })
        .collect()
}

/// Autocorrelation up to [`DEFAULT_MAX_LAG`].
pub fn calculate_acf_default(values: &[f64]) -> Vec<AcfEntry> {
    calculate_acf(values, DEFAULT_MAX_LAG)
}

/// Lag with the strongest positive correlation at or above `min_lag`.
///
/// Returns `None` when no such lag has a positive correlation.
pub fn dominant_lag(entries: &[AcfEntry], min_lag: usize) -> Option<usize> {
    entries
        .iter()
        .filter(|e| e.lag >= min_lag && e.correlation > 0.0)
        .fold(None, |best: Option<&AcfEntry>, e| match best {
            Some(b) if b.correlation >= e.correlation => Some(b),
            _ => Some(e),
        })
        .map(|e| e.lag)
}
