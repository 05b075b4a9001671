//! RetrievalEngine: implements IRetriever over a [`CorpusIndex`].
//!
//! Pipeline per query: tokenize → cache lookup → BM25 (stemmed TF-IDF when no
//! exact term overlaps) → rank by (−score, index) → attach provenance →
//! write-through to cache.

use serde_json::Value;
use tracing::{debug, info};

use factum_core::config::RetrievalConfig;
use factum_core::errors::FactumResult;
use factum_core::models::{Passage, RetrievedPassage, ScoreSource};
use factum_core::traits::IRetriever;
use factum_tokens::tokenize;

use crate::cache::{CacheKey, CacheStats, RetrievalCache};
use crate::index::{CorpusIndex, CorpusStats};
use crate::provenance::passage_from_record;
use crate::ranking;
use crate::search::bm25::{self, Bm25Params};
use crate::search::tfidf::TfidfIndex;

#[derive(Debug)]
pub struct RetrievalEngine {
    index: CorpusIndex,
    tfidf: Option<TfidfIndex>,
    params: Bm25Params,
    cache: RetrievalCache,
}

impl RetrievalEngine {
    /// Build an engine from already-normalized passages.
    pub fn new(passages: Vec<Passage>, config: &RetrievalConfig) -> FactumResult<Self> {
        let params = Bm25Params::new(config.k1, config.b)?;
        let tfidf = config.tfidf_fallback.then(|| TfidfIndex::build(&passages));
        let index = CorpusIndex::build(passages);
        let cache = match &config.cache_dir {
            Some(dir) => RetrievalCache::with_dir(config.cache_capacity, dir),
            None => RetrievalCache::in_memory(config.cache_capacity),
        };
        Ok(Self {
            index,
            tfidf,
            params,
            cache,
        })
    }

    /// Build from raw passage records (`{"text": ..., <provenance fields>}`).
    /// A record without a string `text` is a fatal configuration error.
    pub fn from_records(records: &[Value], config: &RetrievalConfig) -> FactumResult<Self> {
        let passages = records
            .iter()
            .enumerate()
            .map(|(i, record)| passage_from_record(i, record))
            .collect::<FactumResult<Vec<_>>>()?;
        Self::new(passages, config)
    }

    /// Engine with default configuration.
    pub fn with_defaults(records: &[Value]) -> FactumResult<Self> {
        Self::from_records(records, &RetrievalConfig::default())
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn fingerprint(&self) -> &str {
        self.index.fingerprint()
    }

    pub fn corpus_stats(&self) -> CorpusStats {
        self.index.stats()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache(&self) -> &RetrievalCache {
        &self.cache
    }

    /// Score without touching the cache. Returns ranked `(index, score)`
    /// pairs and the scorer that produced them.
    pub fn score_query(
        &self,
        query_tokens: &[String],
        top_k: usize,
    ) -> (Vec<(usize, f64)>, ScoreSource) {
        let exact = bm25::score(&self.index, query_tokens, self.params);
        if !exact.is_empty() {
            return (ranking::rank(exact, top_k), ScoreSource::Bm25);
        }
        match &self.tfidf {
            Some(tfidf) => {
                let fallback = tfidf.score(query_tokens);
                if !fallback.is_empty() {
                    debug!(
                        hits = fallback.len(),
                        "no exact term overlap, using tf-idf fallback"
                    );
                }
                (ranking::rank(fallback, top_k), ScoreSource::Tfidf)
            }
            None => (Vec::new(), ScoreSource::Bm25),
        }
    }

    fn materialize(&self, ranked: &[(usize, f64)], scorer: ScoreSource) -> Vec<RetrievedPassage> {
        ranked
            .iter()
            .filter_map(|&(idx, score)| {
                let passage = self.index.passage(idx)?;
                Some(RetrievedPassage {
                    index: idx,
                    source_id: passage.source_id().to_string(),
                    text: passage.text.clone(),
                    score,
                    scorer,
                    provenance: passage.provenance.clone(),
                })
            })
            .collect()
    }
}

impl IRetriever for RetrievalEngine {
    fn retrieve(&self, query: &str, top_k: usize) -> Vec<RetrievedPassage> {
        if top_k == 0 {
            return Vec::new();
        }
        let tokens = tokenize(query);
        if tokens.is_empty() || self.index.is_empty() {
            debug!(
                empty_query = tokens.is_empty(),
                empty_corpus = self.index.is_empty(),
                "nothing to retrieve"
            );
            return Vec::new();
        }

        let key = CacheKey::new(top_k, self.index.fingerprint(), &tokens);
        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }

        let (ranked, scorer) = self.score_query(&tokens, top_k);
        let results = self.materialize(&ranked, scorer);

        info!(
            query_terms = tokens.len(),
            top_k,
            results = results.len(),
            scorer = ?scorer,
            "retrieval complete"
        );

        self.cache.put(&key, &results);
        results
    }
}
