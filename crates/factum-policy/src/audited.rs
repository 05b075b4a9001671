//! Verification with a persisted audit trail.

use serde_json::{json, Map};

use factum_core::errors::FactumResult;
use factum_core::models::{StructuralViolation, Verification};
use factum_observability::{AuditLogger, ClaimAudit, RunSummary};

use crate::policy::VerifierPolicy;

impl VerifierPolicy {
    /// Structural violations for each decision, indexed like
    /// `verification.decisions`. Claim ids are `claim-<n>`.
    pub fn structural_violations(&self, verification: &Verification) -> Vec<Vec<StructuralViolation>> {
        verification
            .decisions
            .iter()
            .enumerate()
            .map(|(i, decision)| self.structural.check(&claim_id(i), decision))
            .collect()
    }

    /// Verify `text` at the configured threshold, then write one
    /// `claim_audit` record per claim and a closing `run_summary`.
    pub fn verify_and_audit(
        &self,
        text: &str,
        logger: &mut AuditLogger,
    ) -> FactumResult<Verification> {
        let verification = self.verify(text, None)?;
        let violations = self.structural_violations(&verification);
        let violation_count = violations.iter().map(Vec::len).sum();

        for (i, (decision, violations)) in verification.decisions.iter().zip(violations).enumerate() {
            let events: Vec<_> = verification.events_for(i).collect();
            let mut extra = Map::new();
            extra.insert("events".to_string(), serde_json::to_value(events)?);
            logger.log_claim_audit(ClaimAudit::from_decision(claim_id(i), decision, violations), extra)?;
        }

        let mut extra = Map::new();
        extra.insert("text_chars".to_string(), json!(text.chars().count()));
        logger.log_run_summary(
            RunSummary::from_verification(&verification, violation_count),
            extra,
        )?;
        Ok(verification)
    }
}

fn claim_id(index: usize) -> String {
    format!("claim-{index}")
}
