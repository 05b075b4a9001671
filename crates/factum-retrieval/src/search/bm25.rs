//! Okapi BM25 over exact query terms.
//!
//! `score(d) = Σ_t idf(t) · tf·(k1+1) / (tf + k1·(1 − b + b·|d|/avgdl))`
//! with `idf(t) = ln(1 + (N − df + 0.5)/(df + 0.5))`, which is always
//! positive, so any shared term yields a positive score.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use factum_core::config::{defaults, validate_bm25};
use factum_core::errors::ConfigError;

use crate::index::CorpusIndex;

/// BM25 parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    /// Term frequency saturation.
    pub k1: f64,
    /// Length normalization: 0 = none, 1 = full.
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self {
            k1: defaults::DEFAULT_BM25_K1,
            b: defaults::DEFAULT_BM25_B,
        }
    }
}

impl Bm25Params {
    pub fn new(k1: f64, b: f64) -> Result<Self, ConfigError> {
        validate_bm25(k1, b)?;
        Ok(Self { k1, b })
    }
}

/// Inverse document frequency of a term; 0 for terms absent from the corpus.
pub fn idf(index: &CorpusIndex, term: &str) -> f64 {
    let df = index.doc_freq(term);
    if df == 0 {
        return 0.0;
    }
    let n = index.len() as f64;
    let df = df as f64;
    (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
}

/// Score every passage sharing at least one query term.
///
/// Repeated query terms contribute once per occurrence.
pub fn score(index: &CorpusIndex, query_tokens: &[String], params: Bm25Params) -> Vec<(usize, f64)> {
    let avgdl = index.avg_doc_len();
    let mut scores: BTreeMap<usize, f64> = BTreeMap::new();

    for term in query_tokens {
        let postings = index.postings(term);
        if postings.is_empty() {
            continue;
        }
        let term_idf = idf(index, term);
        for &doc in postings {
            let tf = index.term_freq(doc, term) as f64;
            let len_ratio = if avgdl > 0.0 {
                index.doc_len(doc) as f64 / avgdl
            } else {
                0.0
            };
            let norm = tf + params.k1 * (1.0 - params.b + params.b * len_ratio);
            *scores.entry(doc).or_default() += term_idf * tf * (params.k1 + 1.0) / norm;
        }
    }

    scores.into_iter().filter(|(_, s)| *s > 0.0).collect()
}
