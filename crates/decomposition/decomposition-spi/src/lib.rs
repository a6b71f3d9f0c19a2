//! Decomposition Service Provider Interface
//!
//! Defines the data model, error type and traits shared by the classical
//! decomposition engine, the autocorrelation module and narrative providers.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Decomposer, Narrator};
pub use error::{DecompositionError, Result};
pub use model::{
    AcfEntry, Analysis, AnalysisSummary, DecompositionResult, LinearFit, NarrativeContext,
    Observation, TrendDirection,
};
