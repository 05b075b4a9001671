use serde::{Deserialize, Serialize};

/// A structural-integrity problem found in a claim's evidence set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralViolation {
    pub claim_id: String,
    pub code: String,
    pub message: String,
    /// Source id, `quote[i]` or `passage[i]` the violation points at, when there is one.
    pub evidence_ref: Option<String>,
}
