//! Autocorrelation entry model

use serde::{Deserialize, Serialize};

/// Sample autocorrelation at a single lag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcfEntry {
    /// Lag in observations
    pub lag: usize,
    /// Correlation in [-1, 1]; 0 for a flat series
    pub correlation: f64,
}

impl AcfEntry {
    pub fn new(lag: usize, correlation: f64) -> Self {
        Self { lag, correlation }
    }
}
