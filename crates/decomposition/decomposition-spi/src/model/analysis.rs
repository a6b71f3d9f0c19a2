//! Combined analysis output

use crate::model::{AcfEntry, AnalysisSummary, DecompositionResult};
use serde::{Deserialize, Serialize};

/// Decomposition and autocorrelation profile of one series, plus an
/// optional narrative summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub decomposition: DecompositionResult,
    pub acf: Vec<AcfEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<AnalysisSummary>,
}
