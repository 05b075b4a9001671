use crate::models::{Quote, RetrievedPassage};

/// Selects candidate evidence quotes for a claim.
///
/// Implementations must return at most `max_quotes` quotes, each referencing
/// one of `passages` by position, ordered by descending score with ties kept
/// in input order.
pub trait IAligner: Send + Sync {
    fn align(&self, claim: &str, passages: &[RetrievedPassage], max_quotes: usize) -> Vec<Quote>;
}
