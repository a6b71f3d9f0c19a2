//! Linear fit model

use serde::{Deserialize, Serialize};

/// Ordinary least-squares fit of `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearFit {
    /// Change in `y` per unit of `x`
    pub slope: f64,
    /// Value of the fitted line at `x = 0`
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
}

impl LinearFit {
    pub fn new(slope: f64, intercept: f64, r_squared: f64) -> Self {
        Self {
            slope,
            intercept,
            r_squared,
        }
    }

    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}
