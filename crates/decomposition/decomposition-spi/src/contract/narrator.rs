//! Trait for narrative providers

use crate::error::Result;
use crate::model::{AnalysisSummary, NarrativeContext};

/// Turns the headline figures of an analysis into prose.
///
/// Providers backed by remote services may fail; callers are expected to
/// fall back to a local template rather than drop the numeric result.
pub trait Narrator: Send + Sync {
    fn narrate(&self, context: &NarrativeContext) -> Result<AnalysisSummary>;
}
