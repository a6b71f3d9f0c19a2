//! Decomposition Core
//!
//! Core implementations for classical additive decomposition, the OLS
//! statistics kernel, sample autocorrelation and narrative summaries.

pub mod analysis;
pub mod autocorrelation;
pub mod decomposition;
pub mod narrative;
pub mod stats;

// Re-export SPI types for implementations
pub use decomposition_spi::{
    AcfEntry, Analysis, AnalysisSummary, DecompositionError, DecompositionResult, Decomposer,
    LinearFit, NarrativeContext, Narrator, Observation, Result, TrendDirection,
};

// Re-export main entry points
pub use analysis::{Analyzer, DEFAULT_MIN_POINTS};
pub use autocorrelation::{calculate_acf, calculate_acf_default, dominant_lag, DEFAULT_MAX_LAG};
pub use decomposition::{decompose, decompose_values, moving_average_trend, AdditiveDecomposer};
pub use narrative::{narrate_or_fallback, TemplateNarrator};
pub use stats::linear_regression;
