//! # factum-policy
//!
//! The verifier: turns free text into per-claim decisions backed by quoted
//! evidence, and tunes its own support threshold against labeled examples.
//!
//! ```text
//! text ─▶ decompose ─▶ retrieve ─▶ align ─▶ constrain ─▶ decide
//!                                                         │
//!                                        audit log ◀──────┘
//! ```

pub mod audited;
pub mod calibration;
pub mod decomposer;
pub mod policy;

pub use calibration::{default_grid, CalibrationReport, GridPoint};
pub use decomposer::SentenceDecomposer;
pub use policy::VerifierPolicy;
