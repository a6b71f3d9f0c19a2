//! Classical additive decomposition
//!
//! Splits a regularly spaced series into `Y = T + S + R`, where `T` is a
//! centred moving average, `S` a repeating per-phase seasonal profile and `R`
//! the remainder. The trend line is then summarised by an OLS fit.

use crate::stats::linear_regression;
use decomposition_spi::{
    DecompositionError, DecompositionResult, Decomposer, Observation, Result,
};
use tracing::debug;

/// Additive decomposition: Y = T + S + R
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveDecomposer;

impl AdditiveDecomposer {
    pub fn new() -> Self {
        Self
    }
}

impl Decomposer for AdditiveDecomposer {
    fn decompose(
        &self,
        observations: &[Observation],
        period: usize,
    ) -> Result<DecompositionResult> {
        decompose(observations, period)
    }
}

/// Centred moving average of order `period`.
///
/// Odd periods use the plain mean of the `period` points around `i`. Even
/// periods span `period + 1` points with the two end points at half weight,
/// and the weighted sum is divided by `period`. The first and last
/// `period / 2` slots have no trend value.
pub fn moving_average_trend(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut trend = vec![None; n];
    if period == 0 {
        return trend;
    }

    let half = period / 2;
    let divisor = period as f64;
    for i in half..n.saturating_sub(half) {
        let window = &values[i - half..=i + half];
        let sum = if period % 2 == 0 {
            let last = window.len() - 1;
            window
                .iter()
                .enumerate()
                .map(|(j, v)| if j == 0 || j == last { 0.5 * v } else { *v })
                .sum::<f64>()
        } else {
            window.iter().sum::<f64>()
        };
        trend[i] = Some(sum / divisor);
    }
    trend
}

/// Average detrended value per phase, centred to sum to zero.
///
/// Phases with no detrended member contribute 0 before centring.
fn seasonal_profile(detrended: &[Option<f64>], period: usize) -> Vec<f64> {
    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (i, d) in detrended.iter().enumerate() {
        if let Some(d) = d {
            sums[i % period] += d;
            counts[i % period] += 1;
        }
    }

    let averages: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(&s, &c)| if c > 0 { s / c as f64 } else { 0.0 })
        .collect();
    let offset = averages.iter().sum::<f64>() / period as f64;
    averages.into_iter().map(|a| a - offset).collect()
}

/// Perform classical additive decomposition.
///
/// `period` must be at least 1. Short inputs are not rejected: when the
/// moving-average window does not fit, trend and residual are all `None`,
/// the seasonal component is all zero and the trend fit is `(0, 0)`.
pub fn decompose(observations: &[Observation], period: usize) -> Result<DecompositionResult> {
    if period == 0 {
        return Err(DecompositionError::InvalidPeriod(period));
    }

    let original: Vec<f64> = observations.iter().map(|o| o.value).collect();
    let timestamps: Vec<i64> = observations.iter().map(|o| o.timestamp).collect();

    let trend = moving_average_trend(&original, period);

    let detrended: Vec<Option<f64>> = original
        .iter()
        .zip(&trend)
        .map(|(v, t)| t.map(|t| v - t))
        .collect();

    let profile = seasonal_profile(&detrended, period);
    let seasonal: Vec<f64> = (0..original.len()).map(|i| profile[i % period]).collect();

    let residual: Vec<Option<f64>> = original
        .iter()
        .zip(&trend)
        .zip(&seasonal)
        .map(|((v, t), s)| t.map(|t| v - t - s))
        .collect();

    let (trend_x, trend_y): (Vec<f64>, Vec<f64>) = trend
        .iter()
        .enumerate()
        .filter_map(|(i, t)| t.map(|t| (i as f64, t)))
        .unzip();
    let fit = linear_regression(&trend_x, &trend_y);

    debug!(
        n = original.len(),
        period,
        trend_points = trend_x.len(),
        slope = fit.slope,
        r_squared = fit.r_squared,
        "decomposed series"
    );

    Ok(DecompositionResult {
        original,
        timestamps,
        trend,
        seasonal,
        residual,
        seasonal_profile: profile,
        period,
        slope: fit.slope,
        intercept: fit.intercept,
        r_squared: fit.r_squared,
    })
}

/// Decompose bare values, using the index as timestamp.
pub fn decompose_values(values: &[f64], period: usize) -> Result<DecompositionResult> {
    decompose(&Observation::from_values(values), period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_odd_period_plain_mean() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let trend = moving_average_trend(&values, 3);
        assert_eq!(trend, vec![None, Some(2.0), Some(3.0), Some(4.0), None]);
    }

    #[test]
    fn test_even_period_half_weights() {
        let values = [1.0, 5.0, 2.0, 8.0, 3.0, 7.0];
        let trend = moving_average_trend(&values, 4);

        // (0.5*1 + 5 + 2 + 8 + 0.5*3) / 4
        let expected_2 = (0.5 * 1.0 + 5.0 + 2.0 + 8.0 + 0.5 * 3.0) / 4.0;
        // (0.5*5 + 2 + 8 + 3 + 0.5*7) / 4
        let expected_3 = (0.5 * 5.0 + 2.0 + 8.0 + 3.0 + 0.5 * 7.0) / 4.0;

        assert_eq!(trend[0], None);
        assert_eq!(trend[1], None);
        assert!((trend[2].unwrap() - expected_2).abs() < 1e-12);
        assert!((trend[3].unwrap() - expected_3).abs() < 1e-12);
        assert_eq!(trend[4], None);
        assert_eq!(trend[5], None);
    }

    #[test]
    fn test_period_one_is_identity_trend() {
        let values = [4.0, -1.0, 9.0];
        let trend = moving_average_trend(&values, 1);
        assert_eq!(trend, vec![Some(4.0), Some(-1.0), Some(9.0)]);
    }

    #[test]
    fn test_zero_period_rejected() {
        let err = decompose_values(&[1.0, 2.0, 3.0], 0).unwrap_err();
        assert_eq!(err, DecompositionError::InvalidPeriod(0));
    }

    #[test]
    fn test_additive_identity() {
        let values: Vec<f64> = (0..36)
            .map(|i| 50.0 + 0.7 * i as f64 + ((i % 4) as f64) * 3.0 + (i as f64 * 1.3).sin())
            .collect();
        let result = decompose_values(&values, 4).unwrap();

        for i in 0..values.len() {
            if let (Some(t), Some(r)) = (result.trend[i], result.residual[i]) {
                let rebuilt = t + result.seasonal[i] + r;
                assert!((rebuilt - values[i]).abs() < 1e-9);
            } else {
                assert!(result.trend[i].is_none());
                assert!(result.residual[i].is_none());
            }
        }
    }

    #[test]
    fn test_seasonal_profile_sums_to_zero() {
        let values: Vec<f64> = (0..30)
            .map(|i| 10.0 + [5.0, -2.0, 8.0, 1.0, -4.0][i % 5] + i as f64)
            .collect();
        let result = decompose_values(&values, 5).unwrap();

        assert_eq!(result.seasonal_profile.len(), 5);
        let total: f64 = result.seasonal_profile.iter().sum();
        assert!(total.abs() < 1e-9);
        for (i, s) in result.seasonal.iter().enumerate() {
            assert_eq!(*s, result.seasonal_profile[i % 5]);
        }
    }

    #[test]
    fn test_edge_gaps() {
        let values: Vec<f64> = (0..20).map(|i| i as f64).collect();
        for period in [2usize, 3, 4, 7] {
            let result = decompose_values(&values, period).unwrap();
            let half = period / 2;
            for (i, t) in result.trend.iter().enumerate() {
                let inside = i >= half && i < values.len() - half;
                assert_eq!(t.is_some(), inside, "period {} index {}", period, i);
            }
        }
    }

    #[test]
    fn test_linear_series_has_flat_seasonality() {
        let values: Vec<f64> = (0..24).map(|i| 100.0 + 5.0 * i as f64).collect();
        let result = decompose_values(&values, 4).unwrap();

        assert!((result.slope - 5.0).abs() < 1e-9);
        assert!((result.r_squared - 1.0).abs() < 1e-9);
        for s in &result.seasonal {
            assert!(s.abs() < 1e-9);
        }
    }

    #[test]
    fn test_period_longer_than_series() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = decompose_values(&values, 12).unwrap();

        assert_eq!(result.len(), 5);
        assert!(result.trend.iter().all(Option::is_none));
        assert!(result.residual.iter().all(Option::is_none));
        assert!(result.seasonal.iter().all(|&s| s == 0.0));
        assert_eq!(result.slope, 0.0);
        assert_eq!(result.r_squared, 0.0);
    }

    #[test]
    fn test_empty_series() {
        let result = decompose(&[], 7).unwrap();
        assert!(result.is_empty());
        assert!(result.trend.is_empty());
        assert_eq!(result.seasonal_profile, vec![0.0; 7]);
        assert_eq!(result.slope, 0.0);
    }

    #[test]
    fn test_timestamps_carried_through() {
        let obs: Vec<Observation> = (0..8)
            .map(|i| Observation::new(1_700_000_000 + i * 86_400, i as f64))
            .collect();
        let result = AdditiveDecomposer::new().decompose(&obs, 2).unwrap();
        assert_eq!(result.timestamps[0], 1_700_000_000);
        assert_eq!(result.timestamps[7], 1_700_000_000 + 7 * 86_400);
    }

    #[test]
    fn test_monthly_sine_with_trend() {
        let values: Vec<f64> = (0..24)
            .map(|i| 100.0 + 2.0 * i as f64 + 10.0 * (2.0 * PI * i as f64 / 12.0).sin())
            .collect();
        let result = decompose_values(&values, 12).unwrap();

        assert!((result.slope - 2.0).abs() < 0.05);
        assert!(result.r_squared > 0.95);
        assert_eq!(result.defined_trend_count(), 12);
    }
}
