//! Seams of the verification pipeline. Each has a default implementation
//! in the crate that owns the concern.

mod aligner;
mod constraint;
mod decomposer;
mod retriever;

pub use aligner::IAligner;
pub use constraint::{CheckResult, IConstraint};
pub use decomposer::IDecomposer;
pub use retriever::IRetriever;
