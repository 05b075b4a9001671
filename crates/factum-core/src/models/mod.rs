//! Data model shared by retrieval, validation, policy, and audit.

mod decision;
mod heldout;
mod passage;
mod quote;
mod violation;

pub use decision::{AuditEvent, AuditEventKind, ClaimDecision, Verification};
pub use heldout::HeldoutExample;
pub use passage::{Passage, Provenance, RetrievedPassage, ScoreSource, Span};
pub use quote::Quote;
pub use violation::StructuralViolation;
