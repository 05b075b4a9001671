//! Property tests for retrieval ranking invariants.

use factum_core::models::{Passage, Provenance};
use factum_core::traits::IRetriever;
use factum_retrieval::search::bm25;
use factum_retrieval::{Bm25Params, CorpusIndex, RetrievalEngine};
use proptest::prelude::*;
use test_fixtures::records_from_texts;

const VOCAB: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "theta", "kappa",
];

const QUERY_VOCAB: &[&str] = &["alpha", "beta", "gamma"];

fn doc_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 1..12).prop_map(|w| w.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(doc_strategy(), 1..10)
}

fn engine(docs: &[String]) -> RetrievalEngine {
    let texts: Vec<&str> = docs.iter().map(String::as_str).collect();
    RetrievalEngine::with_defaults(&records_from_texts(&texts)).unwrap()
}

proptest! {
    #[test]
    fn retrieval_is_deterministic(docs in corpus_strategy(), query in doc_strategy(), k in 1usize..8) {
        let a = engine(&docs).retrieve(&query, k);
        let b = engine(&docs).retrieve(&query, k);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn ranking_is_score_desc_then_index_asc(docs in corpus_strategy(), query in doc_strategy()) {
        let results = engine(&docs).retrieve(&query, docs.len());
        for pair in results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.score > b.score || (a.score == b.score && a.index < b.index));
        }
        prop_assert!(results.iter().all(|r| r.score > 0.0));
    }

    #[test]
    fn result_count_never_exceeds_top_k(docs in corpus_strategy(), query in doc_strategy(), k in 0usize..6) {
        prop_assert!(engine(&docs).retrieve(&query, k).len() <= k);
    }

    #[test]
    fn another_query_term_occurrence_never_lowers_a_passage(
        docs in corpus_strategy(),
        target in 0usize..10,
        query in prop::collection::vec(prop::sample::select(QUERY_VOCAB), 1..4),
        slot in 0usize..12,
    ) {
        let target = target % docs.len();
        let mut words: Vec<&str> = docs[target].split(' ').collect();
        let replaceable: Vec<usize> = (0..words.len())
            .filter(|&i| !query.iter().any(|q| *q == words[i]))
            .collect();
        prop_assume!(!replaceable.is_empty());

        let query_tokens: Vec<String> = query.iter().map(|w| w.to_string()).collect();
        let before = target_score(&docs, target, &query_tokens);

        words[replaceable[slot % replaceable.len()]] = query[0];
        let mut edited = docs.clone();
        edited[target] = words.join(" ");
        let after = target_score(&edited, target, &query_tokens);

        prop_assert!(after > 0.0);
        prop_assert!(after >= before, "before {} after {}", before, after);
    }
}

/// BM25 score of one passage, length held by the caller.
fn target_score(docs: &[String], target: usize, query_tokens: &[String]) -> f64 {
    let passages = docs
        .iter()
        .map(|text| Passage {
            text: text.clone(),
            provenance: Provenance::default(),
        })
        .collect();
    let index = CorpusIndex::build(passages);
    bm25::score(&index, query_tokens, Bm25Params::default())
        .into_iter()
        .find(|&(doc, _)| doc == target)
        .map_or(0.0, |(_, score)| score)
}
