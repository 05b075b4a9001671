use serde::{Deserialize, Serialize};

/// Evidence span extracted from one of a claim's retrieved passages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Index into the claim's retrieved passages (not the corpus).
    pub passage_index: usize,
    pub source_id: String,
    /// Byte offsets into the passage text.
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub score: f64,
}
