//! Observation model

use serde::{Deserialize, Serialize};

/// A single (timestamp, value) point of a regularly spaced series.
///
/// Timestamps are opaque ordering keys (Unix seconds by convention); the
/// engine never inspects them beyond carrying them into the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Unix timestamp
    pub timestamp: i64,
    /// Observed value
    pub value: f64,
}

impl Observation {
    /// Create a new observation.
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Build observations from bare values, using the index as timestamp.
    pub fn from_values(values: &[f64]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| Self::new(i as i64, value))
            .collect()
    }
}

impl From<(i64, f64)> for Observation {
    fn from((timestamp, value): (i64, f64)) -> Self {
        Self::new(timestamp, value)
    }
}
