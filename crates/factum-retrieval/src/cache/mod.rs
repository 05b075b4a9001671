//! Content-addressed retrieval cache.
//!
//! Key = blake3(top_k, corpus fingerprint, normalized query tokens), so an
//! entry can never be served for a different corpus. Two layers: a bounded
//! in-process `moka` cache, then an optional directory of JSON entries. Any
//! disk failure is a miss; the caller recomputes and overwrites.

mod disk;

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use factum_core::models::RetrievedPassage;

pub use disk::{CacheEntry, DiskCache};

/// Cache key for one (corpus, query, k) triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub digest: String,
    pub fingerprint: String,
    pub top_k: usize,
    pub query_tokens: Vec<String>,
}

impl CacheKey {
    pub fn new(top_k: usize, fingerprint: &str, query_tokens: &[String]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(top_k as u64).to_le_bytes());
        hasher.update(&[0x1f]);
        hasher.update(fingerprint.as_bytes());
        for token in query_tokens {
            hasher.update(&[0x1e]);
            hasher.update(token.as_bytes());
        }
        Self {
            digest: hasher.finalize().to_hex().to_string(),
            fingerprint: fingerprint.to_string(),
            top_k,
            query_tokens: query_tokens.to_vec(),
        }
    }
}

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub memory_hits: u64,
    pub disk_hits: u64,
    pub misses: u64,
    pub disk_errors: u64,
}

pub struct RetrievalCache {
    memory: Cache<String, Arc<Vec<RetrievedPassage>>>,
    disk: Option<DiskCache>,
    memory_hits: AtomicU64,
    disk_hits: AtomicU64,
    misses: AtomicU64,
    disk_errors: AtomicU64,
}

impl RetrievalCache {
    /// In-process cache only.
    pub fn in_memory(capacity: u64) -> Self {
        Self {
            memory: Cache::new(capacity),
            disk: None,
            memory_hits: AtomicU64::new(0),
            disk_hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            disk_errors: AtomicU64::new(0),
        }
    }

    /// In-process cache backed by a directory. If the directory cannot be
    /// created the cache degrades to memory-only.
    pub fn with_dir(capacity: u64, dir: impl Into<PathBuf>) -> Self {
        let mut cache = Self::in_memory(capacity);
        match DiskCache::open(dir.into()) {
            Ok(disk) => cache.disk = Some(disk),
            Err(e) => {
                warn!(error = %e, "disk cache unavailable, using memory only");
            }
        }
        cache
    }

    pub fn has_disk_layer(&self) -> bool {
        self.disk.is_some()
    }

    /// Look up a key in memory, then on disk. Disk hits are promoted.
    pub fn get(&self, key: &CacheKey) -> Option<Vec<RetrievedPassage>> {
        if let Some(hit) = self.memory.get(&key.digest) {
            self.memory_hits.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key.digest, "retrieval cache hit (memory)");
            return Some(hit.as_ref().clone());
        }

        if let Some(disk) = &self.disk {
            match disk.read(key) {
                Ok(Some(entry)) => {
                    self.disk_hits.fetch_add(1, Ordering::Relaxed);
                    debug!(key = %key.digest, "retrieval cache hit (disk)");
                    self.memory
                        .insert(key.digest.clone(), Arc::new(entry.results.clone()));
                    return Some(entry.results);
                }
                Ok(None) => {}
                Err(e) => {
                    self.disk_errors.fetch_add(1, Ordering::Relaxed);
                    warn!(error = %e, "discarding unreadable cache entry");
                }
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Write-through to both layers. Disk failures are logged, never raised.
    pub fn put(&self, key: &CacheKey, results: &[RetrievedPassage]) {
        self.memory
            .insert(key.digest.clone(), Arc::new(results.to_vec()));
        if let Some(disk) = &self.disk {
            if let Err(e) = disk.write(key, results) {
                self.disk_errors.fetch_add(1, Ordering::Relaxed);
                warn!(error = %e, "failed to persist cache entry");
            }
        }
    }

    /// Drop the in-process layer (disk entries survive).
    pub fn clear_memory(&self) {
        self.memory.invalidate_all();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            memory_hits: self.memory_hits.load(Ordering::Relaxed),
            disk_hits: self.disk_hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            disk_errors: self.disk_errors.load(Ordering::Relaxed),
        }
    }
}

impl std::fmt::Debug for RetrievalCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetrievalCache")
            .field("entries", &self.memory.entry_count())
            .field("disk", &self.disk)
            .field("stats", &self.stats())
            .finish()
    }
}
