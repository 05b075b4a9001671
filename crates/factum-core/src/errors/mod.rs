//! Error types. One enum per subsystem, folded into [`FactumError`].

mod audit_error;
mod config_error;
pub mod error_code;
mod retrieval_error;

pub use audit_error::AuditError;
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use retrieval_error::RetrievalError;

/// Top-level error for every fallible Factum operation.
#[derive(Debug, thiserror::Error)]
pub enum FactumError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error("invalid passage record at index {index}: {reason}")]
    InvalidPassage { index: usize, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ErrorCode for FactumError {
    fn error_code(&self) -> &'static str {
        match self {
            FactumError::Config(e) => e.error_code(),
            FactumError::Retrieval(e) => e.error_code(),
            FactumError::Audit(e) => e.error_code(),
            FactumError::InvalidPassage { .. } => error_code::INVALID_PASSAGE,
            FactumError::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Convenience alias used across the workspace.
pub type FactumResult<T> = Result<T, FactumError>;
