use serde::{Deserialize, Serialize};

/// Outcome of a single constraint check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub passed: bool,
    /// Machine-readable failure code (empty when passed).
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub detail: serde_json::Map<String, serde_json::Value>,
}

impl CheckResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            code: String::new(),
            message: String::new(),
            detail: serde_json::Map::new(),
        }
    }

    pub fn fail(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            passed: false,
            code: code.into(),
            message: message.into(),
            detail: serde_json::Map::new(),
        }
    }

    pub fn with_detail(mut self, key: &str, value: serde_json::Value) -> Self {
        self.detail.insert(key.to_string(), value);
        self
    }
}

/// Deterministic predicate over a (claim, quote) pair.
pub trait IConstraint: Send + Sync {
    /// Name reported in audit events.
    fn name(&self) -> &str;

    fn check(&self, claim: &str, quote: &str) -> CheckResult;
}
