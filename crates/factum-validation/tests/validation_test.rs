//! Alignment, constraint, and structural checks against hand-built evidence.

use factum_core::config::StructuralConfig;
use factum_core::models::{ClaimDecision, Provenance, Quote, RetrievedPassage, ScoreSource};
use factum_core::traits::{CheckResult, IAligner, IConstraint};
use factum_validation::structural::codes;
use factum_validation::{
    ConstraintOutcome, ConstraintSet, JaccardAligner, MinQuoteTokens, NumericPreservation,
    StructuralChecker,
};

fn passage(index: usize, source_id: &str, text: &str) -> RetrievedPassage {
    RetrievedPassage {
        index,
        source_id: source_id.to_string(),
        text: text.to_string(),
        score: 1.0,
        scorer: ScoreSource::Bm25,
        provenance: Provenance {
            source_id: source_id.to_string(),
            ..Provenance::default()
        },
    }
}

fn quote_of(passages: &[RetrievedPassage], i: usize) -> Quote {
    Quote {
        passage_index: i,
        source_id: passages[i].source_id.clone(),
        start: 0,
        end: passages[i].text.len(),
        text: passages[i].text.clone(),
        score: 0.5,
    }
}

fn decision(passages: Vec<RetrievedPassage>, quotes: Vec<Quote>) -> ClaimDecision {
    ClaimDecision {
        claim: "claim".to_string(),
        supported: !quotes.is_empty(),
        score: 0.5,
        threshold: 0.25,
        quotes,
        passages,
        failures: Vec::new(),
    }
}

fn codes_of(violations: &[factum_core::StructuralViolation]) -> Vec<&str> {
    violations.iter().map(|v| v.code.as_str()).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Alignment
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn revenue_claim_aligns_to_doc1() {
    let passages = vec![passage(0, "doc1", "The company grew revenue by 42% in 2023.")];
    let quotes = JaccardAligner::default().align("Revenue grew by 42%.", &passages, 3);
    assert_eq!(quotes.len(), 1);
    let q = &quotes[0];
    assert_eq!(q.passage_index, 0);
    assert_eq!(q.source_id, "doc1");
    assert!((q.score - 0.5).abs() < 1e-12);
    assert_eq!(q.text, passages[0].text);
    assert_eq!((q.start, q.end), (0, passages[0].text.len()));
}

#[test]
fn zero_overlap_passages_are_skipped() {
    let passages = vec![
        passage(0, "a", "nothing in common"),
        passage(1, "b", "revenue grew"),
    ];
    let quotes = JaccardAligner::default().align("Revenue grew.", &passages, 3);
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].passage_index, 1);
    assert_eq!(quotes[0].score, 1.0);
}

#[test]
fn quotes_sorted_desc_with_stable_ties() {
    let passages = vec![
        passage(7, "low", "revenue fell sharply this quarter overall"),
        passage(3, "tie-a", "revenue grew"),
        passage(9, "tie-b", "grew revenue"),
    ];
    let quotes = JaccardAligner::default().align("revenue grew", &passages, 3);
    let order: Vec<&str> = quotes.iter().map(|q| q.source_id.as_str()).collect();
    assert_eq!(order, vec!["tie-a", "tie-b", "low"]);
}

#[test]
fn max_quotes_truncates() {
    let passages: Vec<_> = (0..5).map(|i| passage(i, &format!("s{i}"), "revenue grew")).collect();
    let aligner = JaccardAligner::default();
    assert_eq!(aligner.align("revenue", &passages, 2).len(), 2);
    assert!(aligner.align("revenue", &passages, 0).is_empty());
}

#[test]
fn window_truncates_on_char_boundary() {
    let text = "Revenue rose. ".to_string() + &"é".repeat(400);
    let passages = vec![passage(0, "long", &text)];
    let quotes = JaccardAligner::new(20).align("revenue rose", &passages, 1);
    assert_eq!(quotes[0].text.chars().count(), 20);
    assert!(text.starts_with(&quotes[0].text));
    assert_eq!(quotes[0].end, quotes[0].text.len());
}

// ═══════════════════════════════════════════════════════════════════════════
// Constraints
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn numeric_constraint_rejects_wrong_figure() {
    let r = NumericPreservation.check(
        "Revenue grew by 99%.",
        "The company grew revenue by 42% in 2023.",
    );
    assert!(!r.passed);
    assert_eq!(r.code, "missing_numbers");
    assert_eq!(r.detail["missing"], serde_json::json!(["99"]));
}

#[test]
fn numeric_constraint_accepts_decimals_and_grouping() {
    assert!(NumericPreservation
        .check("dividend of 0.25", "a quarterly dividend of 0.25 dollars")
        .passed);
    assert!(NumericPreservation
        .check("reached 1,200 million", "reaching 1200 million dollars")
        .passed);
    assert!(!NumericPreservation.check("0.75 per share", "0.25 per share").passed);
}

struct Forbid(&'static str);

impl IConstraint for Forbid {
    fn name(&self) -> &str {
        "forbid_word"
    }

    fn check(&self, _claim: &str, quote: &str) -> CheckResult {
        if quote.contains(self.0) {
            CheckResult::fail("forbidden_word", format!("quote contains {}", self.0))
        } else {
            CheckResult::pass()
        }
    }
}

#[test]
fn custom_constraints_run_after_builtins() {
    let set = ConstraintSet::new()
        .with(Box::new(NumericPreservation))
        .with(Box::new(MinQuoteTokens::new(2)))
        .with(Box::new(Forbid("allegedly")));
    assert_eq!(set.len(), 3);

    assert!(set.evaluate("grew 5%", "revenue grew 5%").passed());

    match set.evaluate("grew 5%", "revenue grew 6%") {
        ConstraintOutcome::Failed { constraint, .. } => {
            assert_eq!(constraint, "numeric_preservation")
        }
        ConstraintOutcome::Passed => panic!("expected numeric failure"),
    }
    match set.evaluate("grew", "allegedly grew") {
        ConstraintOutcome::Failed { constraint, result } => {
            assert_eq!(constraint, "forbid_word");
            assert_eq!(result.code, "forbidden_word");
        }
        ConstraintOutcome::Passed => panic!("expected custom failure"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Structural integrity
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn sound_evidence_has_no_violations() {
    let passages = vec![passage(0, "doc1", "The company grew revenue by 42% in 2023.")];
    let quotes = vec![quote_of(&passages, 0)];
    let checker = StructuralChecker::default();
    assert!(checker.check("c0", &decision(passages, quotes)).is_empty());
}

#[test]
fn empty_evidence_reports_passages_and_quotes() {
    let violations = StructuralChecker::default().check("c0", &decision(vec![], vec![]));
    assert_eq!(codes_of(&violations), vec![codes::NO_PASSAGES, codes::NO_QUOTES]);
    assert!(violations.iter().all(|v| v.claim_id == "c0"));
}

#[test]
fn phantom_and_edited_quotes_are_flagged() {
    let passages = vec![passage(0, "doc1", "The company grew revenue by 42% in 2023.")];
    let mut phantom = quote_of(&passages, 0);
    phantom.passage_index = 4;
    let mut edited = quote_of(&passages, 0);
    edited.text = "The company grew revenue by 43% in 2023.".to_string();

    let violations =
        StructuralChecker::default().check("c1", &decision(passages, vec![phantom, edited]));
    assert_eq!(
        codes_of(&violations),
        vec![codes::QUOTE_OUTSIDE_RETRIEVAL, codes::QUOTE_NOT_VERBATIM]
    );
    assert_eq!(violations[0].evidence_ref.as_deref(), Some("quote[0]"));
    assert_eq!(violations[1].evidence_ref.as_deref(), Some("doc1"));
}

#[test]
fn verbatim_check_can_be_disabled() {
    let passages = vec![passage(0, "doc1", "The company grew revenue by 42% in 2023.")];
    let mut edited = quote_of(&passages, 0);
    edited.text = "paraphrased but long enough to count".to_string();
    let checker = StructuralChecker::new(StructuralConfig {
        require_verbatim: false,
        ..StructuralConfig::default()
    });
    assert!(checker.check("c", &decision(passages, vec![edited])).is_empty());
}

#[test]
fn short_quotes_fail_char_floor() {
    let passages = vec![passage(0, "doc1", "Revenue grew.")];
    let violations =
        StructuralChecker::default().check("c", &decision(passages.clone(), vec![quote_of(&passages, 0)]));
    assert_eq!(codes_of(&violations), vec![codes::INSUFFICIENT_QUOTE_CHARS]);
}

#[test]
fn diversity_requires_two_passages() {
    let passages = vec![
        passage(0, "doc1", "The company grew revenue by 42% in 2023."),
        passage(1, "doc2", "Revenue growth of 42% was reported for 2023."),
    ];
    let checker = StructuralChecker::new(StructuralConfig {
        require_diversity: true,
        ..StructuralConfig::default()
    });

    let single = decision(passages.clone(), vec![quote_of(&passages, 0)]);
    let violations = checker.check("c", &single);
    assert_eq!(codes_of(&violations), vec![codes::SINGLE_PASSAGE_QUOTES]);
    assert_eq!(violations[0].evidence_ref.as_deref(), Some("passage[0]"));

    let both = decision(passages.clone(), vec![quote_of(&passages, 0), quote_of(&passages, 1)]);
    assert!(checker.check("c", &both).is_empty());
}

#[test]
fn chunks_of_one_document_count_as_distinct_passages() {
    let passages = vec![
        passage(0, "annual-report", "The company grew revenue by 42% in 2023."),
        passage(1, "annual-report", "Revenue growth of 42% was reported for 2023."),
    ];
    let checker = StructuralChecker::new(StructuralConfig {
        require_diversity: true,
        ..StructuralConfig::default()
    });
    let both = decision(passages.clone(), vec![quote_of(&passages, 0), quote_of(&passages, 1)]);
    assert!(checker.check("c", &both).is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// Provenance and quote bounds
// ═══════════════════════════════════════════════════════════════════════════

fn with_uri(mut p: RetrievedPassage, uri: &str) -> RetrievedPassage {
    p.provenance.uri = Some(uri.to_string());
    p
}

#[test]
fn passages_need_http_uri_or_known_source() {
    let text = "The company grew revenue by 42% in 2023.";
    let passages = vec![
        with_uri(passage(0, "doc1", text), "https://example.com/acme"),
        with_uri(passage(1, "doc2", text), "ftp://example.com/acme"),
        passage(2, "unknown", text),
        passage(3, "doc4", text),
    ];
    let quotes = vec![quote_of(&passages, 0)];
    let violations = StructuralChecker::default().check("c", &decision(passages, quotes));

    assert_eq!(
        codes_of(&violations),
        vec![codes::BAD_PROVENANCE_URI, codes::MISSING_PROVENANCE]
    );
    assert_eq!(violations[0].evidence_ref.as_deref(), Some("passage[1]"));
    assert_eq!(violations[1].evidence_ref.as_deref(), Some("passage[2]"));
}

#[test]
fn provenance_check_can_be_disabled() {
    let passages = vec![passage(0, "unknown", "The company grew revenue by 42% in 2023.")];
    let quotes = vec![quote_of(&passages, 0)];
    let checker = StructuralChecker::new(StructuralConfig {
        require_provenance: false,
        ..StructuralConfig::default()
    });
    assert!(checker.check("c", &decision(passages, quotes)).is_empty());
}

#[test]
fn provenance_is_checked_even_without_quotes() {
    let passages = vec![passage(0, "unknown", "Unrelated text about weather.")];
    let violations = StructuralChecker::default().check("c", &decision(passages, vec![]));
    assert_eq!(
        codes_of(&violations),
        vec![codes::MISSING_PROVENANCE, codes::NO_QUOTES]
    );
}

#[test]
fn blank_quotes_are_flagged_and_skipped() {
    let passages = vec![passage(0, "doc1", "The company grew revenue by 42% in 2023.")];
    let mut blank = quote_of(&passages, 0);
    blank.text = " \n\t ".to_string();
    blank.passage_index = 9;
    let quotes = vec![blank, quote_of(&passages, 0)];
    let violations = StructuralChecker::default().check("c", &decision(passages, quotes));
    assert_eq!(codes_of(&violations), vec![codes::EMPTY_QUOTE]);
    assert_eq!(violations[0].evidence_ref.as_deref(), Some("quote[0]"));
}

#[test]
fn overlong_quotes_are_flagged() {
    let passages = vec![passage(0, "doc1", "The company grew revenue by 42% in 2023.")];
    let quotes = vec![quote_of(&passages, 0)];
    let checker = StructuralChecker::new(StructuralConfig {
        max_quote_chars: 10,
        ..StructuralConfig::default()
    });
    let violations = checker.check("c", &decision(passages, quotes));
    assert_eq!(codes_of(&violations), vec![codes::QUOTE_TOO_LONG]);
    assert_eq!(violations[0].evidence_ref.as_deref(), Some("quote[0]"));
}
