use serde::{Deserialize, Serialize};

use super::defaults;

/// Structural-integrity checks applied per claim/evidence set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralConfig {
    /// Quote text must be a verbatim substring of its passage.
    pub require_verbatim: bool,
    /// Aggregate quote characters must exceed this floor.
    pub min_quote_chars: usize,
    /// Upper bound on a single quote, in characters after whitespace folding.
    pub max_quote_chars: usize,
    /// Quotes must not all come from a single passage.
    pub require_diversity: bool,
    /// Retrieved passages need an http(s) uri or a known source id.
    pub require_provenance: bool,
}

impl Default for StructuralConfig {
    fn default() -> Self {
        Self {
            require_verbatim: defaults::DEFAULT_REQUIRE_VERBATIM,
            min_quote_chars: defaults::DEFAULT_MIN_QUOTE_CHARS,
            max_quote_chars: defaults::DEFAULT_MAX_QUOTE_CHARS,
            require_diversity: defaults::DEFAULT_REQUIRE_DIVERSITY,
            require_provenance: defaults::DEFAULT_REQUIRE_PROVENANCE,
        }
    }
}
