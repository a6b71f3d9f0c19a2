//! Trait for time series decomposition

use crate::error::Result;
use crate::model::{DecompositionResult, Observation};

/// Trait for time series decomposition
///
/// Implementations are stateless: each call reads the observations and
/// builds a fresh result, so one decomposer may be shared across threads.
pub trait Decomposer: Send + Sync {
    /// Decompose a series into trend, seasonal and residual components
    fn decompose(&self, observations: &[Observation], period: usize)
        -> Result<DecompositionResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecompositionError;

    /// Mock implementation: everything is trend, no season, no residual
    struct TrivialDecomposer;

    impl Decomposer for TrivialDecomposer {
        fn decompose(
            &self,
            observations: &[Observation],
            period: usize,
        ) -> Result<DecompositionResult> {
            if period == 0 {
                return Err(DecompositionError::InvalidPeriod(period));
            }
            let n = observations.len();
            Ok(DecompositionResult {
                original: observations.iter().map(|o| o.value).collect(),
                timestamps: observations.iter().map(|o| o.timestamp).collect(),
                trend: observations.iter().map(|o| Some(o.value)).collect(),
                seasonal: vec![0.0; n],
                residual: vec![Some(0.0); n],
                seasonal_profile: vec![0.0; period],
                period,
                slope: 0.0,
                intercept: 0.0,
                r_squared: 0.0,
            })
        }
    }

    #[test]
    fn test_trivial_decomposer_reconstructs() {
        let data = Observation::from_values(&[10.0, 20.0, 30.0]);
        let result = TrivialDecomposer.decompose(&data, 2).unwrap();
        let rebuilt = result.reconstruct();
        for (obs, r) in data.iter().zip(rebuilt) {
            assert_eq!(r, Some(obs.value));
        }
    }

    #[test]
    fn test_zero_period_rejected() {
        let data = Observation::from_values(&[1.0, 2.0]);
        let err = TrivialDecomposer.decompose(&data, 0).unwrap_err();
        assert_eq!(err, DecompositionError::InvalidPeriod(0));
    }

    #[test]
    fn test_decomposer_as_trait_object() {
        let decomposer: Box<dyn Decomposer> = Box::new(TrivialDecomposer);
        let data = Observation::from_values(&[1.0, 2.0, 3.0, 4.0]);
        let result = decomposer.decompose(&data, 2).unwrap();
        assert_eq!(result.len(), 4);
        assert_eq!(result.timestamps, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_decomposer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TrivialDecomposer>();
    }
}
