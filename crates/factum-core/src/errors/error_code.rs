//! Stable error codes for callers that match on strings rather than variants.

/// Every error enum exposes a stable upper-snake code.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_PASSAGE: &str = "INVALID_PASSAGE";
pub const CACHE_ERROR: &str = "CACHE_ERROR";
pub const AUDIT_IO_ERROR: &str = "AUDIT_IO_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
