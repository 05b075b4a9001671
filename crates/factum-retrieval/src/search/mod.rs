//! Scoring functions. Each returns `(passage index, score)` pairs for
//! passages with a strictly positive score, in ascending index order.

pub mod bm25;
pub mod tfidf;
