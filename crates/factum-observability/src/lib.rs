//! # factum-observability
//!
//! Audit trail and structured logging for the verifier.
//!
//! - [`audit`]: append-only JSON-Lines records, one per claim plus a run
//!   summary, each stamped with run id, UTC timestamp, and record id.
//! - [`tracing_setup`]: subscriber initialization driven by `FACTUM_LOG`,
//!   and the span macros used across the pipeline.

pub mod audit;
pub mod tracing_setup;

pub use audit::{AuditEventType, AuditLogger, AuditRecord, ClaimAudit, RunSummary};
pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
