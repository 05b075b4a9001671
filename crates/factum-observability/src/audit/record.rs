//! Audit record payloads.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use factum_core::constants::{
    CONSTRAINT_FAILURE_PREFIX, NO_ALIGNED_QUOTES, NO_RETRIEVED_PASSAGES,
};
use factum_core::models::{ClaimDecision, Provenance, Quote, StructuralViolation, Verification};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    ClaimAudit,
    RunSummary,
}

/// One line of the audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub event_type: AuditEventType,
    pub run_id: String,
    /// RFC 3339, UTC.
    pub ts_utc: String,
    pub record_id: String,
    pub claim: Option<ClaimAudit>,
    pub summary: Option<RunSummary>,
    #[serde(default)]
    pub extra: Map<String, Value>,
}

/// Per-claim audit payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimAudit {
    pub claim_id: String,
    pub claim_text: String,
    /// `"supported"` or `"unsupported"`.
    pub decision: String,
    pub confidence: f64,
    pub required_passages_ok: bool,
    pub quote_alignment_ok: bool,
    /// No quote was dropped by a constraint and the evidence set is
    /// structurally sound.
    pub constraints_ok: bool,
    pub failures: Vec<String>,
    pub constraint_violations: Vec<StructuralViolation>,
    pub quotes: Vec<Quote>,
    /// Provenance of the passages the kept quotes point at, in quote order.
    pub provenance: Vec<Provenance>,
    pub metadata: Map<String, Value>,
}

impl ClaimAudit {
    pub fn from_decision(
        claim_id: impl Into<String>,
        decision: &ClaimDecision,
        violations: Vec<StructuralViolation>,
    ) -> Self {
        let has = |code: &str| decision.failures.iter().any(|f| f == code);
        let required_passages_ok = !has(NO_RETRIEVED_PASSAGES);
        let quote_alignment_ok = required_passages_ok && !has(NO_ALIGNED_QUOTES);
        let constraint_dropped = decision
            .failures
            .iter()
            .any(|f| f.starts_with(CONSTRAINT_FAILURE_PREFIX));

        let mut seen = BTreeSet::new();
        let provenance = decision
            .quotes
            .iter()
            .filter(|q| seen.insert(q.passage_index))
            .filter_map(|q| decision.passage_for(q))
            .map(|p| p.provenance.clone())
            .collect();

        let mut metadata = Map::new();
        metadata.insert("threshold".to_string(), json!(decision.threshold));
        metadata.insert("retrieved".to_string(), json!(decision.passages.len()));
        metadata.insert(
            "retrieved_sources".to_string(),
            json!(decision
                .passages
                .iter()
                .map(|p| p.source_id.as_str())
                .collect::<Vec<_>>()),
        );

        Self {
            claim_id: claim_id.into(),
            claim_text: decision.claim.clone(),
            decision: if decision.supported {
                "supported"
            } else {
                "unsupported"
            }
            .to_string(),
            confidence: decision.score,
            required_passages_ok,
            quote_alignment_ok,
            constraints_ok: !constraint_dropped && violations.is_empty(),
            failures: decision.failures.clone(),
            constraint_violations: violations,
            quotes: decision.quotes.clone(),
            provenance,
            metadata,
        }
    }
}

/// Run-level aggregate written once per verification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub claims: usize,
    pub supported: usize,
    pub unsupported: usize,
    pub threshold: f64,
    /// Example-level verdict: at least one claim and all supported.
    pub all_supported: bool,
    pub events: usize,
    pub structural_violations: usize,
    /// Occurrences of each failure code across claims.
    pub failure_counts: BTreeMap<String, usize>,
}

impl RunSummary {
    pub fn from_verification(verification: &Verification, structural_violations: usize) -> Self {
        let supported = verification.decisions.iter().filter(|d| d.supported).count();
        let mut failure_counts = BTreeMap::new();
        for failure in verification.decisions.iter().flat_map(|d| &d.failures) {
            *failure_counts.entry(failure.clone()).or_insert(0) += 1;
        }
        Self {
            claims: verification.decisions.len(),
            supported,
            unsupported: verification.decisions.len() - supported,
            threshold: verification.threshold,
            all_supported: verification.all_supported(),
            events: verification.events.len(),
            structural_violations,
            failure_counts,
        }
    }
}
