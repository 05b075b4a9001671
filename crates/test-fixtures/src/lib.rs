//! Shared fixtures for Factum integration tests: passage corpora and labeled
//! held-out sets under `data/`, plus the small inline corpora the
//! verification scenarios are written against.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::path::PathBuf;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Passage records of a named corpus under `data/corpus/`.
pub fn corpus_records(name: &str) -> Vec<Value> {
    load_fixture(&format!("corpus/{name}.json"))
}

/// The six-passage company-filing corpus.
pub fn financial_corpus() -> Vec<Value> {
    corpus_records("financial")
}

/// Raw held-out records (`{"text", "supported"}`) under `data/heldout/`.
pub fn heldout_records(name: &str) -> Vec<Value> {
    load_fixture(&format!("heldout/{name}.json"))
}

/// Single-passage corpus used by the revenue scenarios.
pub fn revenue_corpus() -> Vec<Value> {
    vec![json!({"text": "The company grew revenue by 42% in 2023.", "id": "doc1"})]
}

/// Records built from bare texts, ids `p0`, `p1`, ...
pub fn records_from_texts(texts: &[&str]) -> Vec<Value> {
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| json!({"text": t, "id": format!("p{i}")}))
        .collect()
}
