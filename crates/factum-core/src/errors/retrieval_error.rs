use super::error_code::{self, ErrorCode};

/// Retrieval subsystem errors.
///
/// Ordinary queries never produce these; they surface from the cache layer
/// and are downgraded to misses by the retriever.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("cache entry {key} unreadable: {reason}")]
    CacheRead { key: String, reason: String },

    #[error("cache entry {key} could not be written: {reason}")]
    CacheWrite { key: String, reason: String },

    #[error("cache entry {key} belongs to corpus {found}, expected {expected}")]
    FingerprintMismatch {
        key: String,
        expected: String,
        found: String,
    },
}

impl ErrorCode for RetrievalError {
    fn error_code(&self) -> &'static str {
        match self {
            RetrievalError::CacheRead { .. }
            | RetrievalError::CacheWrite { .. }
            | RetrievalError::FingerprintMismatch { .. } => error_code::CACHE_ERROR,
        }
    }
}

