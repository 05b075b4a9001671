//! Word tokenizer: Unicode word runs, internal apostrophes kept, lower-cased.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\w+(?:'\w+)*").ok());

/// Tokenize text into lower-cased word tokens.
///
/// "Don't" stays one token (`don't`); "42%" yields `42`; empty input yields
/// an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let Some(re) = WORD.as_ref() else {
        return Vec::new();
    };
    // Typographic apostrophes must not split contractions.
    let lowered = text.to_lowercase().replace('\u{2019}', "'");
    re.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Distinct tokens of `text`, ordered.
pub fn token_set(text: &str) -> BTreeSet<String> {
    tokenize(text).into_iter().collect()
}
