//! Decomposition error types

use thiserror::Error;

/// Errors that can occur while analysing a time series
///
/// Degenerate numerics (flat series, zero-variance regressors) are not errors:
/// the kernels return documented fallback values instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecompositionError {
    /// Too few observations for a meaningful decomposition
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Seasonal period outside the supported range
    #[error("Invalid period {0}: period must be at least 1")]
    InvalidPeriod(usize),

    /// Invalid configuration value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The narrative collaborator failed to produce a summary
    #[error("Narration failed: {0}")]
    Narration(String),
}
