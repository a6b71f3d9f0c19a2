//! Model module containing data structures

mod acf_entry;
mod analysis;
mod decomposition_result;
mod linear_fit;
mod narrative;
mod observation;

pub use acf_entry::AcfEntry;
pub use analysis::Analysis;
pub use decomposition_result::DecompositionResult;
pub use linear_fit::LinearFit;
pub use narrative::{AnalysisSummary, NarrativeContext, TrendDirection};
pub use observation::Observation;
