//! Decomposition result model

use crate::model::{LinearFit, TrendDirection};
use serde::{Deserialize, Serialize};

/// Result of a classical additive decomposition.
///
/// Every per-index vector is aligned with the input series and has the same
/// length. `trend` and `residual` are `None` inside the moving-average edge
/// gaps; `residual[i]` is `None` exactly where `trend[i]` is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    /// Input values
    pub original: Vec<f64>,
    /// Input timestamps
    pub timestamps: Vec<i64>,
    /// Centred moving-average trend
    pub trend: Vec<Option<f64>>,
    /// Seasonal component, defined at every index
    pub seasonal: Vec<f64>,
    /// `original - trend - seasonal` where the trend is defined
    pub residual: Vec<Option<f64>>,
    /// Centred per-phase seasonal figures, one per position in the period
    pub seasonal_profile: Vec<f64>,
    /// Period used for the decomposition
    pub period: usize,
    /// Slope of the OLS line fitted to the defined trend values
    pub slope: f64,
    /// Intercept of the OLS line fitted to the defined trend values
    pub intercept: f64,
    /// Goodness of fit of that line
    pub r_squared: f64,
}

impl DecompositionResult {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// The trend-line fit as a standalone value.
    pub fn trend_fit(&self) -> LinearFit {
        LinearFit::new(self.slope, self.intercept, self.r_squared)
    }

    /// Aggregate trend gain or loss over the whole series (`slope * n`).
    pub fn projected_delta(&self) -> f64 {
        self.slope * self.len() as f64
    }

    /// Direction of the fitted trend line.
    pub fn trend_direction(&self) -> TrendDirection {
        TrendDirection::from_slope(self.slope)
    }

    /// Number of indices with a defined trend value.
    pub fn defined_trend_count(&self) -> usize {
        self.trend.iter().filter(|t| t.is_some()).count()
    }

    /// `trend + seasonal + residual` at each index where all three exist.
    pub fn reconstruct(&self) -> Vec<Option<f64>> {
        self.trend
            .iter()
            .zip(&self.seasonal)
            .zip(&self.residual)
            .map(|((t, s), r)| match (t, r) {
                (Some(t), Some(r)) => Some(t + s + r),
                _ => None,
            })
            .collect()
    }
}
