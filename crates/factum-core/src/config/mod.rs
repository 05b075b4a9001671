//! Configuration. Every section defaults through [`defaults`], so a partial
//! TOML file (or none at all) yields a complete, valid config.

mod audit_config;
pub mod defaults;
mod observability_config;
mod policy_config;
mod retrieval_config;
mod structural_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use audit_config::AuditConfig;
pub use observability_config::ObservabilityConfig;
pub use policy_config::PolicyConfig;
pub use retrieval_config::RetrievalConfig;
pub use structural_config::StructuralConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FactumConfig {
    pub retrieval: RetrievalConfig,
    pub policy: PolicyConfig,
    pub structural: StructuralConfig,
    pub audit: AuditConfig,
    pub observability: ObservabilityConfig,
}

impl FactumConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: FactumConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: FactumConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_bm25(self.retrieval.k1, self.retrieval.b)?;
        validate_policy(&self.policy)?;

        let level = self.observability.log_level.as_str();
        if !matches!(level, "trace" | "debug" | "info" | "warn" | "error") {
            return Err(ConfigError::invalid(
                "observability.log_level",
                format!("unknown level {level:?}"),
            ));
        }
        Ok(())
    }
}

/// Reject thresholds outside [0, 1] (including NaN).
pub fn validate_unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::invalid(
            field,
            format!("must be between 0.0 and 1.0, got {value}"),
        ));
    }
    Ok(())
}

/// BM25 parameters must be finite; `b` is a ratio.
pub fn validate_bm25(k1: f64, b: f64) -> Result<(), ConfigError> {
    if !k1.is_finite() || k1 < 0.0 {
        return Err(ConfigError::invalid(
            "retrieval.k1",
            format!("must be finite and non-negative, got {k1}"),
        ));
    }
    validate_unit_interval("retrieval.b", b)
}

/// Policy invariants shared by config loading and direct construction.
pub fn validate_policy(policy: &PolicyConfig) -> Result<(), ConfigError> {
    validate_unit_interval("policy.threshold", policy.threshold)?;
    if policy.top_k == 0 {
        return Err(ConfigError::invalid("policy.top_k", "must be at least 1"));
    }
    if policy.max_quotes == 0 {
        return Err(ConfigError::invalid(
            "policy.max_quotes",
            "must be at least 1",
        ));
    }
    if policy.min_passages > policy.top_k {
        return Err(ConfigError::invalid(
            "policy.min_passages",
            format!(
                "cannot exceed top_k ({} > {})",
                policy.min_passages, policy.top_k
            ),
        ));
    }
    if policy.quote_window == 0 {
        return Err(ConfigError::invalid(
            "policy.quote_window",
            "must be at least 1",
        ));
    }
    Ok(())
}
