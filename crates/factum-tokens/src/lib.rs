//! # factum-tokens
//!
//! Text normalization shared by indexing, querying, alignment, and
//! constraint checking. Every function here is pure and total: arbitrary
//! input never panics, and identical input always yields identical output,
//! so term identity is consistent across the whole pipeline.

pub mod numbers;
pub mod sentences;
pub mod similarity;
pub mod stem;
pub mod tokenizer;

pub use numbers::extract_numbers;
pub use sentences::split_sentences;
pub use similarity::jaccard;
pub use stem::stem;
pub use tokenizer::{token_set, tokenize};
