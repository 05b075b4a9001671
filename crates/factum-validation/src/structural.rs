//! Structural integrity of a claim's evidence set.
//!
//! Runs on a finished [`ClaimDecision`] and reports every problem found
//! rather than stopping at the first. It never changes the decision.

use std::collections::BTreeSet;

use tracing::debug;
use url::Url;

use factum_core::config::StructuralConfig;
use factum_core::constants::UNKNOWN_SOURCE_ID;
use factum_core::models::{ClaimDecision, RetrievedPassage, StructuralViolation};

pub mod codes {
    pub const NO_PASSAGES: &str = "no_passages";
    pub const BAD_PROVENANCE_URI: &str = "bad_provenance_uri";
    pub const MISSING_PROVENANCE: &str = "missing_provenance";
    pub const NO_QUOTES: &str = "no_quotes";
    pub const EMPTY_QUOTE: &str = "empty_quote";
    pub const QUOTE_TOO_LONG: &str = "quote_too_long";
    pub const QUOTE_OUTSIDE_RETRIEVAL: &str = "quote_outside_retrieval";
    pub const QUOTE_NOT_VERBATIM: &str = "quote_not_verbatim";
    pub const INSUFFICIENT_QUOTE_CHARS: &str = "insufficient_quote_chars";
    pub const SINGLE_PASSAGE_QUOTES: &str = "single_passage_quotes";
}

#[derive(Debug, Clone, Default)]
pub struct StructuralChecker {
    config: StructuralConfig,
}

impl StructuralChecker {
    pub fn new(config: StructuralConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StructuralConfig {
        &self.config
    }

    /// Collect all violations for one decision. An empty result means the
    /// evidence set is structurally sound.
    pub fn check(&self, claim_id: &str, decision: &ClaimDecision) -> Vec<StructuralViolation> {
        let violation = |code: &str, message: String, evidence_ref: Option<String>| {
            StructuralViolation {
                claim_id: claim_id.to_string(),
                code: code.to_string(),
                message,
                evidence_ref,
            }
        };
        let mut violations = Vec::new();

        if decision.passages.is_empty() {
            violations.push(violation(
                codes::NO_PASSAGES,
                "no passages were retrieved".to_string(),
                None,
            ));
        }
        if self.config.require_provenance {
            for (i, passage) in decision.passages.iter().enumerate() {
                if let Some((code, message)) = provenance_problem(passage) {
                    violations.push(violation(code, message, Some(format!("passage[{i}]"))));
                }
            }
        }
        if decision.quotes.is_empty() {
            violations.push(violation(
                codes::NO_QUOTES,
                "no quotes support the claim".to_string(),
                None,
            ));
            debug!(claim_id, violations = violations.len(), "structural check");
            return violations;
        }

        for (i, quote) in decision.quotes.iter().enumerate() {
            let folded_len = fold_whitespace(&quote.text).chars().count();
            if folded_len == 0 {
                violations.push(violation(
                    codes::EMPTY_QUOTE,
                    format!("quote {i} has no text"),
                    Some(format!("quote[{i}]")),
                ));
                continue;
            }
            if folded_len > self.config.max_quote_chars {
                violations.push(violation(
                    codes::QUOTE_TOO_LONG,
                    format!(
                        "quote {i} has {folded_len} characters, limit is {}",
                        self.config.max_quote_chars
                    ),
                    Some(format!("quote[{i}]")),
                ));
            }
            let Some(passage) = decision.passage_for(quote) else {
                violations.push(violation(
                    codes::QUOTE_OUTSIDE_RETRIEVAL,
                    format!(
                        "quote {i} points at passage {} ({}) which was not retrieved",
                        quote.passage_index, quote.source_id
                    ),
                    Some(format!("quote[{i}]")),
                ));
                continue;
            };
            if self.config.require_verbatim && !passage.text.contains(quote.text.as_str()) {
                violations.push(violation(
                    codes::QUOTE_NOT_VERBATIM,
                    format!("quote {i} is not a verbatim excerpt of {}", passage.source_id),
                    Some(passage.source_id.clone()),
                ));
            }
        }

        let total_chars: usize = decision.quotes.iter().map(|q| q.text.chars().count()).sum();
        if total_chars <= self.config.min_quote_chars {
            violations.push(violation(
                codes::INSUFFICIENT_QUOTE_CHARS,
                format!(
                    "quotes total {total_chars} characters, need more than {}",
                    self.config.min_quote_chars
                ),
                None,
            ));
        }

        if self.config.require_diversity {
            // Distinct passages, not distinct sources: chunks of one document
            // share a source id.
            let quoted: BTreeSet<usize> =
                decision.quotes.iter().map(|q| q.passage_index).collect();
            if quoted.len() < 2 {
                violations.push(violation(
                    codes::SINGLE_PASSAGE_QUOTES,
                    "all quotes come from a single passage".to_string(),
                    quoted.first().map(|i| format!("passage[{i}]")),
                ));
            }
        }

        debug!(claim_id, violations = violations.len(), "structural check");
        violations
    }
}

/// A passage is attributable when it carries an http(s) uri with a host,
/// or, lacking any uri, a source id other than the unknown placeholder.
fn provenance_problem(passage: &RetrievedPassage) -> Option<(&'static str, String)> {
    match passage.provenance.uri.as_deref() {
        Some(uri) if !is_http_uri(uri) => Some((
            codes::BAD_PROVENANCE_URI,
            format!("passage {} has a non-http(s) uri: {uri}", passage.source_id),
        )),
        Some(_) => None,
        None if passage.provenance.source_id == UNKNOWN_SOURCE_ID => Some((
            codes::MISSING_PROVENANCE,
            format!("passage at corpus index {} has no uri and no source id", passage.index),
        )),
        None => None,
    }
}

fn is_http_uri(uri: &str) -> bool {
    Url::parse(uri).is_ok_and(|u| {
        matches!(u.scheme(), "http" | "https") && u.host_str().is_some_and(|h| !h.is_empty())
    })
}

fn fold_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
