//! In-memory key-value cache
//!
//! HashMap storage behind a `tokio::sync::RwLock`, with versioned writes.
//! Entries never expire; the featured snapshot lives until it is overwritten.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, KeyValueCache};
use crate::error::Result;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

// == Memory Cache ==
/// Process-local implementation of [`KeyValueCache`].
#[derive(Debug, Default)]
pub struct MemoryCache {
    inner: RwLock<Inner>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current number of entries in the cache.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Returns true if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        // Write lock: the lookup also updates stats
        let mut inner = self.inner.write().await;
        let entry = inner.entries.get(key).cloned();
        match entry {
            Some(_) => inner.stats.record_hit(),
            None => inner.stats.record_miss(),
        }
        Ok(entry)
    }

    async fn set(&self, key: &str, value: String, version: u64) -> Result<bool> {
        let mut inner = self.inner.write().await;

        let stored = inner
            .entries
            .get(key)
            .filter(|existing| !existing.accepts(version))
            .map(|existing| existing.version);
        if let Some(stored) = stored {
            debug!(key, stored, offered = version, "Refusing stale cache write");
            inner.stats.record_stale_write();
            return Ok(false);
        }

        inner
            .entries
            .insert(key.to_string(), CacheEntry::new(value, version));
        inner.stats.record_write();
        Ok(true)
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(self.inner.read().await.stats.clone())
    }
}
