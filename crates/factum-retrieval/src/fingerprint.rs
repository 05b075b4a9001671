//! Corpus fingerprint: a short blake3 digest of passage-set identity.
//!
//! Folds the passage count and, per passage, its source id, character length,
//! and a fixed-length text prefix. Any corpus change that touches those fields
//! changes the fingerprint and therefore every cache key derived from it.

use factum_core::constants::{FINGERPRINT_HEX_LEN, FINGERPRINT_PREFIX_CHARS};
use factum_core::models::Passage;

const FIELD_SEP: &[u8] = &[0x1f];
const RECORD_SEP: &[u8] = &[0x1e];

/// Compute the fingerprint of a passage set.
pub fn corpus_fingerprint(passages: &[Passage]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(passages.len() as u64).to_le_bytes());
    for passage in passages {
        hasher.update(passage.source_id().as_bytes());
        hasher.update(FIELD_SEP);
        hasher.update(&(passage.text.chars().count() as u64).to_le_bytes());
        hasher.update(FIELD_SEP);
        let prefix: String = passage.text.chars().take(FINGERPRINT_PREFIX_CHARS).collect();
        hasher.update(prefix.as_bytes());
        hasher.update(RECORD_SEP);
    }
    let hex = hasher.finalize().to_hex();
    hex.as_str()[..FINGERPRINT_HEX_LEN].to_string()
}
