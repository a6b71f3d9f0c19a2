//! Contract module containing trait definitions for decomposition operations

mod decomposer;
mod narrator;

pub use decomposer::Decomposer;
pub use narrator::Narrator;
