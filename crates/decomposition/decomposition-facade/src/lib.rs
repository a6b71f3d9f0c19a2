//! Decomposition Facade
//!
//! High-level API for time series decomposition. Re-exports all public types
//! from the decomposition stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use decomposition_api::*;

// Explicit re-exports for documentation
pub use decomposition_api::prelude;

// Re-export entry points at root
pub use decomposition_core::{
    calculate_acf, calculate_acf_default, decompose, decompose_values, dominant_lag,
    linear_regression, moving_average_trend, narrate_or_fallback, DEFAULT_MAX_LAG,
    DEFAULT_MIN_POINTS,
};
