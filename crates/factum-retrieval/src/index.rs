//! Inverted index over a flat passage arena.
//!
//! Passages are addressed by their position in the arena; postings hold those
//! positions in ascending order. Built once, read-only afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use factum_core::models::Passage;
use factum_tokens::tokenize;

use crate::fingerprint::corpus_fingerprint;

/// Summary statistics for a built index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub passages: usize,
    pub avg_doc_len: f64,
    pub vocabulary: usize,
}

#[derive(Debug)]
pub struct CorpusIndex {
    passages: Vec<Passage>,
    term_freqs: Vec<HashMap<String, u32>>,
    doc_lengths: Vec<usize>,
    avg_doc_len: f64,
    doc_freq: HashMap<String, usize>,
    postings: HashMap<String, Vec<usize>>,
    fingerprint: String,
}

impl CorpusIndex {
    /// Tokenize every passage and build term statistics.
    pub fn build(passages: Vec<Passage>) -> Self {
        let mut term_freqs = Vec::with_capacity(passages.len());
        let mut doc_lengths = Vec::with_capacity(passages.len());
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut postings: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, passage) in passages.iter().enumerate() {
            let tokens = tokenize(&passage.text);
            doc_lengths.push(tokens.len());

            let mut tf: HashMap<String, u32> = HashMap::new();
            for token in tokens {
                *tf.entry(token).or_default() += 1;
            }
            for term in tf.keys() {
                *doc_freq.entry(term.clone()).or_default() += 1;
                // Passages are visited in order, so each list stays sorted.
                postings.entry(term.clone()).or_default().push(idx);
            }
            term_freqs.push(tf);
        }

        let total: usize = doc_lengths.iter().sum();
        let avg_doc_len = if passages.is_empty() {
            0.0
        } else {
            total as f64 / passages.len() as f64
        };
        let fingerprint = corpus_fingerprint(&passages);

        info!(
            passages = passages.len(),
            vocabulary = doc_freq.len(),
            avg_doc_len,
            fingerprint = %fingerprint,
            "corpus index built"
        );

        Self {
            passages,
            term_freqs,
            doc_lengths,
            avg_doc_len,
            doc_freq,
            postings,
            fingerprint,
        }
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn passage(&self, idx: usize) -> Option<&Passage> {
        self.passages.get(idx)
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }

    pub fn doc_len(&self, idx: usize) -> usize {
        self.doc_lengths.get(idx).copied().unwrap_or(0)
    }

    /// Frequency of `term` in passage `idx`.
    pub fn term_freq(&self, idx: usize, term: &str) -> u32 {
        self.term_freqs
            .get(idx)
            .and_then(|tf| tf.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// Number of passages containing `term`.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// Ascending passage indices containing `term`.
    pub fn postings(&self, term: &str) -> &[usize] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            passages: self.passages.len(),
            avg_doc_len: self.avg_doc_len,
            vocabulary: self.doc_freq.len(),
        }
    }
}
