use factum_core::traits::IDecomposer;
use factum_tokens::split_sentences;

/// One claim per sentence. Text without a sentence boundary is a single
/// claim; empty or whitespace-only text has none.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceDecomposer;

impl IDecomposer for SentenceDecomposer {
    fn decompose(&self, text: &str) -> Vec<String> {
        split_sentences(text)
    }
}
