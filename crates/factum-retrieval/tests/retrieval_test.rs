//! End-to-end retrieval over the fixture corpora.

use factum_core::config::RetrievalConfig;
use factum_core::errors::FactumError;
use factum_core::models::ScoreSource;
use factum_core::traits::IRetriever;
use factum_retrieval::RetrievalEngine;
use serde_json::json;
use test_fixtures::{financial_corpus, records_from_texts, revenue_corpus};

fn engine(records: &[serde_json::Value]) -> RetrievalEngine {
    RetrievalEngine::with_defaults(records).expect("engine")
}

#[test]
fn revenue_query_finds_revenue_passage_first() {
    let engine = engine(&financial_corpus());
    let results = engine.retrieve("Acme Corp grew revenue by 42% in 2023.", 3);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].source_id, "acme-10k-revenue");
    assert_eq!(results[0].scorer, ScoreSource::Bm25);
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn results_carry_normalized_provenance() {
    let engine = engine(&financial_corpus());
    let results = engine.retrieve("quarterly dividend per share", 1);
    let hit = &results[0];
    assert_eq!(hit.source_id, "acme-dividend");
    assert_eq!(hit.provenance.title.as_deref(), Some("Dividend Announcement"));
    assert_eq!(hit.provenance.published_at.as_deref(), Some("2023-11-02"));
    assert_eq!(
        hit.provenance.author.as_deref(),
        Some("Investor Relations, Corporate Secretary")
    );
    assert_eq!(hit.text, "The board approved a quarterly dividend of 0.25 dollars per share.");
}

#[test]
fn single_passage_scenario_corpus() {
    let engine = engine(&revenue_corpus());
    let results = engine.retrieve("Revenue grew by 42%.", 5);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].source_id, "doc1");
    assert_eq!(results[0].index, 0);
    assert!(results[0].score > 0.0);
}

#[test]
fn zero_top_k_is_empty() {
    let engine = engine(&financial_corpus());
    assert!(engine.retrieve("revenue", 0).is_empty());
}

#[test]
fn empty_query_and_empty_corpus_are_empty() {
    let engine_full = engine(&financial_corpus());
    assert!(engine_full.retrieve("", 5).is_empty());
    assert!(engine_full.retrieve("?!...", 5).is_empty());

    let engine_empty = engine(&[]);
    assert!(engine_empty.retrieve("revenue", 5).is_empty());
}

#[test]
fn zero_overlap_query_is_empty() {
    let engine = engine(&financial_corpus());
    assert!(engine.retrieve("xylophone zeppelin", 5).is_empty());
}

#[test]
fn ties_break_on_original_index() {
    let engine = engine(&records_from_texts(&["red apple", "green pear", "red apple", "red apple"]));
    let results = engine.retrieve("apple", 10);
    let order: Vec<usize> = results.iter().map(|r| r.index).collect();
    assert_eq!(order, vec![0, 2, 3]);
    assert_eq!(results[0].score, results[1].score);
}

#[test]
fn top_k_truncates() {
    let engine = engine(&records_from_texts(&["a x", "a y", "a z", "a w"]));
    assert_eq!(engine.retrieve("a", 2).len(), 2);
}

#[test]
fn tfidf_fallback_matches_inflections() {
    let engine = engine(&records_from_texts(&["Quarterly revenue report", "Office relocation"]));
    let results = engine.retrieve("revenues reported", 5);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].source_id, "p0");
    assert_eq!(results[0].scorer, ScoreSource::Tfidf);
}

#[test]
fn fallback_can_be_disabled() {
    let config = RetrievalConfig {
        tfidf_fallback: false,
        ..RetrievalConfig::default()
    };
    let records = records_from_texts(&["Quarterly revenue report"]);
    let engine = RetrievalEngine::from_records(&records, &config).unwrap();
    assert!(engine.retrieve("revenues reported", 5).is_empty());
}

#[test]
fn malformed_record_is_fatal() {
    let records = vec![json!({"text": "fine"}), json!({"id": "no-text"})];
    let err = RetrievalEngine::with_defaults(&records).unwrap_err();
    match err {
        FactumError::InvalidPassage { index, reason } => {
            assert_eq!(index, 1);
            assert!(reason.contains("text"));
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = RetrievalEngine::with_defaults(&[json!("just a string")]).unwrap_err();
    assert!(matches!(err, FactumError::InvalidPassage { index: 0, .. }));

    let err = RetrievalEngine::with_defaults(&[json!({"text": 42})]).unwrap_err();
    assert!(err.to_string().contains("must be a string"));
}

#[test]
fn invalid_bm25_params_are_fatal() {
    let config = RetrievalConfig {
        b: 1.5,
        ..RetrievalConfig::default()
    };
    let err = RetrievalEngine::from_records(&financial_corpus(), &config).unwrap_err();
    assert!(matches!(err, FactumError::Config(_)));
}

#[test]
fn fingerprint_changes_with_corpus() {
    let a = engine(&records_from_texts(&["alpha", "beta"]));
    let b = engine(&records_from_texts(&["alpha", "gamma"]));
    let a2 = engine(&records_from_texts(&["alpha", "beta"]));
    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.fingerprint(), a2.fingerprint());
}

#[test]
fn corpus_stats_reflect_index() {
    let engine = engine(&records_from_texts(&["a b", "c d e f"]));
    let stats = engine.corpus_stats();
    assert_eq!(stats.passages, 2);
    assert!((stats.avg_doc_len - 3.0).abs() < 1e-12);
    assert_eq!(stats.vocabulary, 6);
}
