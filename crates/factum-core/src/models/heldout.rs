use serde::{Deserialize, Serialize};

/// A labeled calibration example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldoutExample {
    pub text: String,
    /// Gold label. Examples without one are taken as supported.
    #[serde(default = "default_supported")]
    pub supported: bool,
}

fn default_supported() -> bool {
    true
}

impl HeldoutExample {
    pub fn new(text: impl Into<String>, supported: bool) -> Self {
        Self {
            text: text.into(),
            supported,
        }
    }
}
