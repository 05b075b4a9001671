//! Failure codes recorded on claim decisions.

pub const NO_RETRIEVED_PASSAGES: &str = "no_retrieved_passages";
pub const NO_ALIGNED_QUOTES: &str = "no_aligned_quotes";
pub const BELOW_THRESHOLD: &str = "below_threshold";

/// Prefix for failures raised by per-quote constraints: `constraint:<code>`.
pub const CONSTRAINT_FAILURE_PREFIX: &str = "constraint:";

/// Source id assigned to passages without one.
pub const UNKNOWN_SOURCE_ID: &str = "unknown";

/// Length of the corpus fingerprint in hex characters.
pub const FINGERPRINT_HEX_LEN: usize = 16;

/// Characters of passage text folded into the corpus fingerprint.
pub const FINGERPRINT_PREFIX_CHARS: usize = 64;

/// Format a constraint failure code.
pub fn constraint_failure(code: &str) -> String {
    format!("{CONSTRAINT_FAILURE_PREFIX}{code}")
}
