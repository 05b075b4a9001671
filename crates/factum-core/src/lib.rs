//! # factum-core
//!
//! Foundation crate for the Factum claim verifier.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FactumConfig;
pub use errors::{FactumError, FactumResult};
pub use models::{
    AuditEvent, AuditEventKind, ClaimDecision, HeldoutExample, Provenance, Quote,
    RetrievedPassage, ScoreSource, Span, StructuralViolation, Verification,
};
