//! # factum-retrieval
//!
//! Deterministic lexical retrieval over a fixed passage set.
//!
//! ## Architecture
//!
//! ```text
//! RetrievalEngine (IRetriever)
//! ├── provenance   loose metadata → canonical Provenance
//! ├── CorpusIndex  term frequencies, postings, doc lengths, fingerprint
//! ├── search
//! │   ├── bm25     exact-term BM25 over postings
//! │   └── tfidf    stemmed TF-IDF cosine, used when no exact term overlaps
//! ├── ranking      (−score, passage index) ordering, top-k cut
//! └── cache        moka in-process layer + optional JSON-per-entry directory
//! ```

pub mod cache;
pub mod engine;
pub mod fingerprint;
pub mod index;
pub mod provenance;
pub mod ranking;
pub mod search;

pub use cache::{CacheKey, CacheStats, RetrievalCache};
pub use engine::RetrievalEngine;
pub use index::{CorpusIndex, CorpusStats};
pub use search::bm25::Bm25Params;
