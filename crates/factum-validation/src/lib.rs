//! # factum-validation
//!
//! Everything between retrieval and the final decision.
//!
//! ## Layers
//! 1. **Alignment**: pick candidate quotes from retrieved passages by token
//!    overlap with the claim ([`JaccardAligner`]).
//! 2. **Constraints**: per-quote predicates evaluated in registration order;
//!    the first failure discards the quote ([`ConstraintSet`]).
//! 3. **Structural integrity**: whole-evidence-set checks run after a
//!    decision exists ([`StructuralChecker`]). Independent of layer 2.

pub mod alignment;
pub mod constraints;
pub mod structural;

pub use alignment::JaccardAligner;
pub use constraints::{ConstraintOutcome, ConstraintSet, MinQuoteTokens, NumericPreservation};
pub use structural::StructuralChecker;
