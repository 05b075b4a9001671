//! VerifierPolicy: the per-claim decision pipeline.
//!
//! Each claim moves through Decomposed → Retrieved → Aligned → Constrained
//! → Decided. Failures at any stage are recorded on the decision and as
//! audit events; they never abort the call. Only invalid configuration
//! (a threshold outside [0, 1], inconsistent policy values) is an error.

use std::collections::BTreeSet;

use serde_json::{json, Map, Value};
use tracing::{debug, info};

use factum_core::config::{validate_policy, validate_unit_interval, FactumConfig, PolicyConfig};
use factum_core::constants::{
    constraint_failure, BELOW_THRESHOLD, NO_ALIGNED_QUOTES, NO_RETRIEVED_PASSAGES,
};
use factum_core::errors::FactumResult;
use factum_core::models::{AuditEvent, AuditEventKind, ClaimDecision, Quote, Verification};
use factum_core::traits::{IAligner, IConstraint, IDecomposer, IRetriever};
use factum_observability::{retrieval_span, verification_span};
use factum_retrieval::RetrievalEngine;
use factum_validation::{ConstraintOutcome, ConstraintSet, JaccardAligner, StructuralChecker};

use crate::decomposer::SentenceDecomposer;

pub struct VerifierPolicy {
    retriever: Box<dyn IRetriever>,
    decomposer: Box<dyn IDecomposer>,
    aligner: Box<dyn IAligner>,
    constraints: ConstraintSet,
    pub(crate) structural: StructuralChecker,
    pub(crate) config: PolicyConfig,
}

impl VerifierPolicy {
    /// Policy over any retriever, with the default decomposer, aligner, and
    /// the built-in constraints `config` enables.
    pub fn new(retriever: Box<dyn IRetriever>, config: PolicyConfig) -> FactumResult<Self> {
        validate_policy(&config)?;
        Ok(Self {
            retriever,
            decomposer: Box::new(SentenceDecomposer),
            aligner: Box::new(JaccardAligner::new(config.quote_window)),
            constraints: ConstraintSet::from_policy(&config),
            structural: StructuralChecker::default(),
            config,
        })
    }

    /// Index `records` and build a policy from a full configuration.
    pub fn from_records(records: &[Value], config: &FactumConfig) -> FactumResult<Self> {
        config.validate()?;
        let engine = RetrievalEngine::from_records(records, &config.retrieval)?;
        let mut policy = Self::new(Box::new(engine), config.policy.clone())?;
        policy.structural = StructuralChecker::new(config.structural.clone());
        Ok(policy)
    }

    pub fn with_decomposer(mut self, decomposer: Box<dyn IDecomposer>) -> Self {
        self.decomposer = decomposer;
        self
    }

    pub fn with_aligner(mut self, aligner: Box<dyn IAligner>) -> Self {
        self.aligner = aligner;
        self
    }

    /// Register an additional constraint after the existing ones.
    pub fn with_constraint(mut self, constraint: Box<dyn IConstraint>) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Replace the whole constraint set.
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_structural_checker(mut self, checker: StructuralChecker) -> Self {
        self.structural = checker;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    pub fn set_threshold(&mut self, threshold: f64) -> FactumResult<()> {
        validate_unit_interval("threshold", threshold)?;
        self.config.threshold = threshold;
        Ok(())
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn structural_checker(&self) -> &StructuralChecker {
        &self.structural
    }

    /// Verify every claim in `text`. `threshold` overrides the configured
    /// one for this call only.
    pub fn verify(&self, text: &str, threshold: Option<f64>) -> FactumResult<Verification> {
        let threshold = threshold.unwrap_or(self.config.threshold);
        validate_unit_interval("threshold", threshold)?;
        let _span = verification_span!(threshold).entered();

        let claims = self.decomposer.decompose(text);
        let mut events = Vec::new();
        let decisions: Vec<ClaimDecision> = claims
            .into_iter()
            .enumerate()
            .map(|(i, claim)| self.decide(i, claim, threshold, &mut events))
            .collect();

        debug!(
            claims = decisions.len(),
            supported = decisions.iter().filter(|d| d.supported).count(),
            events = events.len(),
            "verification complete"
        );
        Ok(Verification {
            threshold,
            decisions,
            events,
        })
    }

    /// [`verify`](Self::verify) rendered as
    /// `{threshold, supported, decisions, audit}`. `threshold` is the
    /// policy's configured threshold; a per-call override shows up on each
    /// decision instead.
    pub fn verify_to_json(&self, text: &str, threshold: Option<f64>) -> FactumResult<Value> {
        let verification = self.verify(text, threshold)?;
        Ok(json!({
            "threshold": self.config.threshold,
            "supported": verification.all_supported(),
            "decisions": serde_json::to_value(&verification.decisions)?,
            "audit": serde_json::to_value(&verification.events)?,
        }))
    }

    fn decide(
        &self,
        claim_index: usize,
        claim: String,
        threshold: f64,
        events: &mut Vec<AuditEvent>,
    ) -> ClaimDecision {
        let mut failures: BTreeSet<String> = BTreeSet::new();
        let mut kept: Vec<Quote> = Vec::new();
        let mut upstream_failure = false;

        let passages = {
            let _span = retrieval_span!(claim, self.config.top_k).entered();
            self.retriever.retrieve(&claim, self.config.top_k)
        };

        if passages.len() < self.config.min_passages {
            upstream_failure = true;
            failures.insert(NO_RETRIEVED_PASSAGES.to_string());
            events.push(event(
                claim_index,
                &claim,
                AuditEventKind::RetrievalFailure,
                json!({
                    "retrieved": passages.len(),
                    "min_passages": self.config.min_passages,
                    "top_k": self.config.top_k,
                }),
            ));
        } else {
            let candidates = self
                .aligner
                .align(&claim, &passages, self.config.max_quotes);
            if candidates.is_empty() {
                upstream_failure = true;
                failures.insert(NO_ALIGNED_QUOTES.to_string());
                events.push(event(
                    claim_index,
                    &claim,
                    AuditEventKind::AlignmentFailure,
                    json!({ "passages": passages.len() }),
                ));
            }
            for quote in candidates {
                match self.constraints.evaluate(&claim, &quote.text) {
                    ConstraintOutcome::Passed => kept.push(quote),
                    ConstraintOutcome::Failed { constraint, result } => {
                        failures.insert(constraint_failure(&result.code));
                        events.push(event(
                            claim_index,
                            &claim,
                            AuditEventKind::ConstraintFailure,
                            json!({
                                "constraint": constraint,
                                "code": result.code,
                                "message": result.message,
                                "detail": result.detail,
                                "source_id": quote.source_id,
                                "passage_index": quote.passage_index,
                            }),
                        ));
                    }
                }
            }
        }

        let score = kept.iter().map(|q| q.score).fold(0.0_f64, f64::max);
        let supported = !kept.is_empty() && score >= threshold && !upstream_failure;
        if !kept.is_empty() && score < threshold {
            failures.insert(BELOW_THRESHOLD.to_string());
        }
        let failures: Vec<String> = failures.into_iter().collect();

        if !supported {
            events.push(event(
                claim_index,
                &claim,
                AuditEventKind::EvidenceFailure,
                json!({
                    "threshold": threshold,
                    "best_score": score,
                    "failures": failures,
                }),
            ));
        }

        info!(
            claim = %claim,
            supported,
            score,
            quotes = kept.len(),
            failures = ?failures,
            "claim decided"
        );

        ClaimDecision {
            claim,
            supported,
            score,
            threshold,
            quotes: kept,
            passages,
            failures,
        }
    }
}

fn event(claim_index: usize, claim: &str, kind: AuditEventKind, detail: Value) -> AuditEvent {
    let detail = match detail {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    AuditEvent {
        claim_index,
        claim: claim.to_string(),
        kind,
        detail,
    }
}

impl std::fmt::Debug for VerifierPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifierPolicy")
            .field("config", &self.config)
            .field("constraints", &self.constraints)
            .field("structural", &self.structural)
            .finish_non_exhaustive()
    }
}
