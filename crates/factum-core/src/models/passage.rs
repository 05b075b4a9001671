use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_SOURCE_ID;

/// Character span inside the original source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Option<u64>,
    pub end: Option<u64>,
}

/// Canonical provenance record. Best-effort: every field except
/// `source_id` may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub source_id: String,
    pub uri: Option<String>,
    pub title: Option<String>,
    pub section: Option<String>,
    pub published_at: Option<String>,
    pub author: Option<String>,
    pub span: Option<Span>,
    /// Unrecognized metadata, carried through untouched.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for Provenance {
    fn default() -> Self {
        Self {
            source_id: UNKNOWN_SOURCE_ID.to_string(),
            uri: None,
            title: None,
            section: None,
            published_at: None,
            author: None,
            span: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// An indexed passage. Immutable once the index is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub text: String,
    pub provenance: Provenance,
}

impl Passage {
    pub fn source_id(&self) -> &str {
        &self.provenance.source_id
    }
}

/// Which scorer ranked a retrieved passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Bm25,
    Tfidf,
}

/// One retrieval hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedPassage {
    /// Position of the passage in the indexed corpus.
    pub index: usize,
    pub source_id: String,
    pub text: String,
    pub score: f64,
    pub scorer: ScoreSource,
    pub provenance: Provenance,
}
