use serde::{Deserialize, Serialize};

use super::defaults;

/// Decision engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Minimum best-quote score for a claim to count as supported. In [0, 1].
    pub threshold: f64,
    /// Passages retrieved per claim.
    pub top_k: usize,
    /// Maximum candidate quotes aligned per claim.
    pub max_quotes: usize,
    /// Fewer retrieved passages than this is a retrieval failure.
    pub min_passages: usize,
    /// Quote prefix window in characters.
    pub quote_window: usize,
    /// Register the numeric-preservation constraint.
    pub numeric_preservation: bool,
    /// Register a minimum quote length constraint (in tokens).
    pub min_quote_tokens: Option<usize>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_THRESHOLD,
            top_k: defaults::DEFAULT_TOP_K,
            max_quotes: defaults::DEFAULT_MAX_QUOTES,
            min_passages: defaults::DEFAULT_MIN_PASSAGES,
            quote_window: defaults::DEFAULT_QUOTE_WINDOW,
            numeric_preservation: defaults::DEFAULT_NUMERIC_PRESERVATION,
            min_quote_tokens: None,
        }
    }
}
