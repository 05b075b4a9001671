use crate::models::RetrievedPassage;

/// Ranked passage retrieval over a fixed corpus.
pub trait IRetriever: Send + Sync {
    /// Return at most `top_k` passages, best first. Never fails for ordinary
    /// queries: an empty result means nothing relevant was found.
    fn retrieve(&self, query: &str, top_k: usize) -> Vec<RetrievedPassage>;
}
