//! One JSON object per cache entry at `<dir>/<digest>.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use factum_core::errors::RetrievalError;
use factum_core::models::RetrievedPassage;

use super::CacheKey;

/// Serialized cache entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub key: String,
    pub fingerprint: String,
    pub top_k: usize,
    pub query_tokens: Vec<String>,
    pub results: Vec<RetrievedPassage>,
}

#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
}

impl DiskCache {
    /// Open (creating if needed) a cache directory.
    pub fn open(dir: PathBuf) -> Result<Self, RetrievalError> {
        fs::create_dir_all(&dir).map_err(|e| RetrievalError::CacheWrite {
            key: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entry_path(&self, digest: &str) -> PathBuf {
        self.dir.join(format!("{digest}.json"))
    }

    /// `Ok(None)` when no entry exists. Unreadable, unparsable, or
    /// mismatched entries are errors the caller treats as misses.
    pub fn read(&self, key: &CacheKey) -> Result<Option<CacheEntry>, RetrievalError> {
        let path = self.entry_path(&key.digest);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RetrievalError::CacheRead {
                    key: key.digest.clone(),
                    reason: e.to_string(),
                })
            }
        };
        let entry: CacheEntry =
            serde_json::from_slice(&bytes).map_err(|e| RetrievalError::CacheRead {
                key: key.digest.clone(),
                reason: e.to_string(),
            })?;
        if entry.fingerprint != key.fingerprint || entry.top_k != key.top_k {
            return Err(RetrievalError::FingerprintMismatch {
                key: key.digest.clone(),
                expected: key.fingerprint.clone(),
                found: entry.fingerprint,
            });
        }
        Ok(Some(entry))
    }

    /// Write via a temp file and rename, so readers never see a partial
    /// entry. Concurrent writers of the same key write identical content.
    pub fn write(&self, key: &CacheKey, results: &[RetrievedPassage]) -> Result<(), RetrievalError> {
        let entry = CacheEntry {
            key: key.digest.clone(),
            fingerprint: key.fingerprint.clone(),
            top_k: key.top_k,
            query_tokens: key.query_tokens.clone(),
            results: results.to_vec(),
        };
        let write_err = |reason: String| RetrievalError::CacheWrite {
            key: key.digest.clone(),
            reason,
        };
        let bytes = serde_json::to_vec(&entry).map_err(|e| write_err(e.to_string()))?;
        let tmp = self
            .dir
            .join(format!("{}.json.tmp-{}", key.digest, std::process::id()));
        fs::write(&tmp, bytes).map_err(|e| write_err(e.to_string()))?;
        fs::rename(&tmp, self.entry_path(&key.digest)).map_err(|e| write_err(e.to_string()))
    }
}
