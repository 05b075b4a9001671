use serde::{Deserialize, Serialize};

use super::{Quote, RetrievedPassage};

/// Outcome of verifying one claim. Created once per claim per verify call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimDecision {
    pub claim: String,
    pub supported: bool,
    /// Best surviving quote score (0.0 when no quote survived).
    pub score: f64,
    pub threshold: f64,
    /// Quotes that survived every constraint.
    pub quotes: Vec<Quote>,
    pub passages: Vec<RetrievedPassage>,
    /// Sorted, de-duplicated failure codes.
    pub failures: Vec<String>,
}

impl ClaimDecision {
    /// The passage a quote points at, if the reference is valid.
    pub fn passage_for(&self, quote: &Quote) -> Option<&RetrievedPassage> {
        self.passages
            .get(quote.passage_index)
            .filter(|p| p.source_id == quote.source_id)
    }
}

/// Kinds of decision-relevant occurrences recorded during verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventKind {
    RetrievalFailure,
    AlignmentFailure,
    ConstraintFailure,
    EvidenceFailure,
}

impl AuditEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditEventKind::RetrievalFailure => "retrieval_failure",
            AuditEventKind::AlignmentFailure => "alignment_failure",
            AuditEventKind::ConstraintFailure => "constraint_failure",
            AuditEventKind::EvidenceFailure => "evidence_failure",
        }
    }
}

/// One audit event attached to a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Position of the claim in the decomposed text. Identical sentences
    /// are distinct claims.
    pub claim_index: usize,
    pub claim: String,
    pub kind: AuditEventKind,
    pub detail: serde_json::Map<String, serde_json::Value>,
}

/// Result of a verify call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub threshold: f64,
    pub decisions: Vec<ClaimDecision>,
    pub events: Vec<AuditEvent>,
}

impl Verification {
    /// Example-level prediction: every decomposed claim supported. Text
    /// with no claims has nothing unsupported, so it counts as supported.
    pub fn all_supported(&self) -> bool {
        self.decisions.iter().all(|d| d.supported)
    }

    /// Events recorded for the claim at `claim_index`.
    pub fn events_for(&self, claim_index: usize) -> impl Iterator<Item = &AuditEvent> + '_ {
        self.events.iter().filter(move |e| e.claim_index == claim_index)
    }
}
