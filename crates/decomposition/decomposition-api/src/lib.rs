//! Decomposition Consumer API
//!
//! Consumer configurations and builder APIs for decomposition analyses.
//!
//! This crate provides:
//! - Configuration types for analysis runs
//! - Seasonal period presets
//! - Re-exports from SPI and core for convenience

pub mod config;
pub mod period;

pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use period::SeasonalPeriod;

// Re-export from core
pub use decomposition_core::{
    analysis, autocorrelation, decomposition, narrative, stats, AdditiveDecomposer, Analyzer,
    TemplateNarrator,
};

// Re-export from SPI
pub use decomposition_spi::{
    AcfEntry, Analysis, AnalysisSummary, DecompositionError, DecompositionResult, Decomposer,
    LinearFit, NarrativeContext, Narrator, Observation, Result, TrendDirection,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AnalysisConfig, AnalysisConfigBuilder, SeasonalPeriod};
    pub use decomposition_core::{
        calculate_acf, decompose, linear_regression, narrate_or_fallback, AdditiveDecomposer,
        Analyzer, TemplateNarrator,
    };
    pub use decomposition_spi::{
        AcfEntry, Analysis, AnalysisSummary, DecompositionError, DecompositionResult, Decomposer,
        LinearFit, NarrativeContext, Narrator, Observation, Result, TrendDirection,
    };
}
