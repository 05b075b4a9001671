//! Stemmed TF-IDF cosine similarity, the fallback when BM25 finds no passage
//! sharing an exact term with the query.
//!
//! Terms are passed through [`factum_tokens::stem`] so inflected forms
//! ("revenues", "reported") still meet their base forms. Document vectors
//! are L2-normalized at build time; a query scores by dot product. Ordered
//! maps keep floating-point summation order fixed across runs.

use std::collections::BTreeMap;

use factum_core::models::Passage;
use factum_tokens::{stem, tokenize};

#[derive(Debug, Default)]
pub struct TfidfIndex {
    idf: BTreeMap<String, f64>,
    doc_vectors: Vec<BTreeMap<String, f64>>,
}

impl TfidfIndex {
    pub fn build(passages: &[Passage]) -> Self {
        let stemmed: Vec<BTreeMap<String, f64>> = passages
            .iter()
            .map(|p| term_counts(&tokenize(&p.text)))
            .collect();

        let mut df: BTreeMap<String, usize> = BTreeMap::new();
        for counts in &stemmed {
            for term in counts.keys() {
                *df.entry(term.clone()).or_default() += 1;
            }
        }

        // Smoothed idf: ln((1 + N) / (1 + df)) + 1.
        let n = passages.len() as f64;
        let idf: BTreeMap<String, f64> = df
            .into_iter()
            .map(|(term, df)| (term, ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0))
            .collect();

        let doc_vectors = stemmed
            .into_iter()
            .map(|counts| weigh_and_normalize(counts, &idf))
            .collect();

        Self { idf, doc_vectors }
    }

    /// Cosine similarity of the query against every passage.
    pub fn score(&self, query_tokens: &[String]) -> Vec<(usize, f64)> {
        let query = weigh_and_normalize(term_counts(query_tokens), &self.idf);
        if query.is_empty() {
            return Vec::new();
        }
        self.doc_vectors
            .iter()
            .enumerate()
            .filter_map(|(idx, doc)| {
                let dot: f64 = query
                    .iter()
                    .filter_map(|(term, w)| doc.get(term).map(|d| w * d))
                    .sum();
                (dot > 0.0).then_some((idx, dot))
            })
            .collect()
    }
}

fn term_counts(tokens: &[String]) -> BTreeMap<String, f64> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(stem(token)).or_insert(0.0) += 1.0;
    }
    counts
}

/// Multiply counts by idf (dropping terms unknown to the corpus) and scale
/// to unit length.
fn weigh_and_normalize(
    counts: BTreeMap<String, f64>,
    idf: &BTreeMap<String, f64>,
) -> BTreeMap<String, f64> {
    let weighted: BTreeMap<String, f64> = counts
        .into_iter()
        .filter_map(|(term, tf)| idf.get(&term).map(|w| (term, tf * w)))
        .collect();
    let norm = weighted.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm == 0.0 {
        return BTreeMap::new();
    }
    weighted.into_iter().map(|(t, w)| (t, w / norm)).collect()
}
