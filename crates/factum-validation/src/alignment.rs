//! Token-overlap evidence alignment.
//!
//! Every retrieved passage sharing at least one token with the claim yields
//! one quote: a prefix of the passage bounded by a character window, scored
//! by the Jaccard similarity of the claim and the whole passage.

use tracing::debug;

use factum_core::config::defaults::DEFAULT_QUOTE_WINDOW;
use factum_core::models::{Quote, RetrievedPassage};
use factum_core::traits::IAligner;
use factum_tokens::{jaccard, token_set};

/// Default aligner.
#[derive(Debug, Clone, Copy)]
pub struct JaccardAligner {
    window: usize,
}

impl JaccardAligner {
    /// `window` is the quote length cap in characters.
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for JaccardAligner {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTE_WINDOW)
    }
}

impl IAligner for JaccardAligner {
    fn align(&self, claim: &str, passages: &[RetrievedPassage], max_quotes: usize) -> Vec<Quote> {
        if max_quotes == 0 {
            return Vec::new();
        }
        let claim_tokens = token_set(claim);

        let mut quotes: Vec<Quote> = passages
            .iter()
            .enumerate()
            .filter_map(|(i, passage)| {
                let score = jaccard(&claim_tokens, &token_set(&passage.text));
                if score <= 0.0 {
                    return None;
                }
                let end = prefix_end(&passage.text, self.window);
                Some(Quote {
                    passage_index: i,
                    source_id: passage.source_id.clone(),
                    start: 0,
                    end,
                    text: passage.text[..end].to_string(),
                    score,
                })
            })
            .collect();

        // sort_by is stable: equal scores keep retrieval order.
        quotes.sort_by(|a, b| b.score.total_cmp(&a.score));
        quotes.truncate(max_quotes);

        debug!(
            passages = passages.len(),
            quotes = quotes.len(),
            "alignment complete"
        );
        quotes
    }
}

/// Byte offset just past the first `max_chars` characters of `text`.
fn prefix_end(text: &str, max_chars: usize) -> usize {
    text.char_indices()
        .nth(max_chars)
        .map_or(text.len(), |(offset, _)| offset)
}
