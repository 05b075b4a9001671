//! Provenance normalization: loose passage metadata → [`Provenance`].
//!
//! Best-effort: unknown shapes fall back to `None`, never to an error. The
//! only hard requirement on a passage record is a string `text` field,
//! enforced by [`passage_from_record`].

use serde_json::{Map, Value};

use factum_core::constants::UNKNOWN_SOURCE_ID;
use factum_core::errors::{FactumError, FactumResult};
use factum_core::models::{Passage, Provenance, Span};

const SOURCE_ID_KEYS: &[&str] = &["source_id", "id", "doc_id"];
const URI_KEYS: &[&str] = &["uri", "url", "source"];
const TITLE_KEYS: &[&str] = &["title"];
const SECTION_KEYS: &[&str] = &["section"];
const PUBLISHED_KEYS: &[&str] = &["published_at", "date", "published"];
const AUTHOR_KEYS: &[&str] = &["author", "authors"];
const SPAN_KEYS: &[&str] = &["span", "start", "end"];

/// Nested objects whose fields are lifted to the top level before
/// normalization. Top-level keys win on conflict.
const NESTED_KEYS: &[&str] = &["provenance", "metadata"];

/// Normalize a metadata map into a canonical provenance record.
pub fn normalize_provenance(meta: &Map<String, Value>) -> Provenance {
    let flat = flatten(meta);

    let source_id =
        first_text(&flat, SOURCE_ID_KEYS).unwrap_or_else(|| UNKNOWN_SOURCE_ID.to_string());
    let span = extract_span(&flat);

    let consumed = |key: &str| {
        key == "text"
            || SOURCE_ID_KEYS.contains(&key)
            || URI_KEYS.contains(&key)
            || TITLE_KEYS.contains(&key)
            || SECTION_KEYS.contains(&key)
            || PUBLISHED_KEYS.contains(&key)
            || AUTHOR_KEYS.contains(&key)
            || SPAN_KEYS.contains(&key)
    };
    let extra = flat
        .iter()
        .filter(|(k, _)| !consumed(k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    Provenance {
        source_id,
        uri: first_text(&flat, URI_KEYS),
        title: first_text(&flat, TITLE_KEYS),
        section: first_text(&flat, SECTION_KEYS),
        published_at: first_text(&flat, PUBLISHED_KEYS),
        author: extract_author(&flat),
        span,
        extra,
    }
}

/// Build a passage from a raw record. `index` is used for error reporting.
pub fn passage_from_record(index: usize, record: &Value) -> FactumResult<Passage> {
    let Some(map) = record.as_object() else {
        return Err(FactumError::InvalidPassage {
            index,
            reason: format!("expected a JSON object, got {}", type_name(record)),
        });
    };
    let text = match map.get("text") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(FactumError::InvalidPassage {
                index,
                reason: format!("`text` must be a string, got {}", type_name(other)),
            })
        }
        None => {
            return Err(FactumError::InvalidPassage {
                index,
                reason: "missing `text` field".to_string(),
            })
        }
    };
    Ok(Passage {
        text,
        provenance: normalize_provenance(map),
    })
}

fn flatten(meta: &Map<String, Value>) -> Map<String, Value> {
    let mut flat = Map::new();
    for nested in NESTED_KEYS {
        if let Some(Value::Object(inner)) = meta.get(*nested) {
            for (k, v) in inner {
                flat.insert(k.clone(), v.clone());
            }
        }
    }
    for (k, v) in meta {
        if NESTED_KEYS.contains(&k.as_str()) && v.is_object() {
            continue;
        }
        flat.insert(k.clone(), v.clone());
    }
    flat
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_text(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| map.get(*k).and_then(as_text))
}

fn extract_author(map: &Map<String, Value>) -> Option<String> {
    AUTHOR_KEYS.iter().find_map(|k| match map.get(*k)? {
        Value::Array(items) => {
            let names: Vec<String> = items.iter().filter_map(as_text).collect();
            (!names.is_empty()).then(|| names.join(", "))
        }
        other => as_text(other),
    })
}

fn as_offset(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn extract_span(map: &Map<String, Value>) -> Option<Span> {
    let (start, end) = match map.get("span") {
        Some(Value::Object(span)) => (
            span.get("start").and_then(as_offset),
            span.get("end").and_then(as_offset),
        ),
        _ => (
            map.get("start").and_then(as_offset),
            map.get("end").and_then(as_offset),
        ),
    };
    if start.is_none() && end.is_none() {
        None
    } else {
        Some(Span { start, end })
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
