//! Property tests for the aligner contract.

use factum_core::models::{Provenance, RetrievedPassage, ScoreSource};
use factum_core::traits::IAligner;
use factum_validation::JaccardAligner;
use proptest::prelude::*;

const VOCAB: &[&str] = &["revenue", "grew", "fell", "plant", "ohio", "42", "dividend", "board"];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 1..10).prop_map(|w| w.join(" "))
}

fn passages(texts: &[String]) -> Vec<RetrievedPassage> {
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| RetrievedPassage {
            index: i,
            source_id: format!("p{i}"),
            text: t.clone(),
            score: 1.0,
            scorer: ScoreSource::Bm25,
            provenance: Provenance::default(),
        })
        .collect()
}

proptest! {
    #[test]
    fn quotes_respect_contract(
        claim in text_strategy(),
        texts in prop::collection::vec(text_strategy(), 0..8),
        max_quotes in 0usize..5,
        window in 1usize..40,
    ) {
        let passages = passages(&texts);
        let quotes = JaccardAligner::new(window).align(&claim, &passages, max_quotes);

        prop_assert!(quotes.len() <= max_quotes);
        for q in &quotes {
            let p = &passages[q.passage_index];
            prop_assert_eq!(&q.source_id, &p.source_id);
            prop_assert!(p.text.starts_with(&q.text));
            prop_assert!(q.text.chars().count() <= window);
            prop_assert!(q.score > 0.0 && q.score <= 1.0);
        }
        for pair in quotes.windows(2) {
            prop_assert!(pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].passage_index < pair[1].passage_index));
        }
    }
}
