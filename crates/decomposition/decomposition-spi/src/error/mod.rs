//! Error module containing error types and result aliases

mod decomposition_error;

pub use decomposition_error::DecompositionError;

/// Result type for decomposition operations
pub type Result<T> = std::result::Result<T, DecompositionError>;
