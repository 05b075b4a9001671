use super::error_code::{self, ErrorCode};

/// Audit sink errors.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("failed to open audit log {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write audit record to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        error_code::AUDIT_IO_ERROR
    }
}
