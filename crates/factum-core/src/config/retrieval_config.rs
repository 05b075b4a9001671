use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// BM25 term-frequency saturation.
    pub k1: f64,
    /// BM25 length normalization (0 = none, 1 = full).
    pub b: f64,
    /// Fall back to stemmed TF-IDF cosine when no passage shares an exact term.
    pub tfidf_fallback: bool,
    /// Directory for on-disk cache entries. `None` keeps the cache in memory only.
    pub cache_dir: Option<String>,
    /// Capacity of the in-process cache layer.
    pub cache_capacity: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            k1: defaults::DEFAULT_BM25_K1,
            b: defaults::DEFAULT_BM25_B,
            tfidf_fallback: defaults::DEFAULT_TFIDF_FALLBACK,
            cache_dir: None,
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
        }
    }
}
