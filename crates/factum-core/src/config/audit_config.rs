use serde::{Deserialize, Serialize};

use super::defaults;

/// Audit sink configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// JSON-Lines file the audit logger appends to.
    pub path: Option<String>,
    /// Flush after every record.
    pub flush_immediately: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            path: None,
            flush_immediately: defaults::DEFAULT_AUDIT_FLUSH_IMMEDIATELY,
        }
    }
}
