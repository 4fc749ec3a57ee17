//! Cache Module
//!
//! The key-value cache port used for the featured products snapshot, and its
//! in-memory backend.

mod entry;
mod stats;
mod store;


use async_trait::async_trait;

use crate::error::Result;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::MemoryCache;

// == Public Constants ==
/// Key under which the featured products snapshot is stored
pub const FEATURED_PRODUCTS_KEY: &str = "featured_products";

// == Key Value Cache ==
/// String key-value cache with versioned writes and no TTL.
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    /// Returns the entry stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>>;

    /// Stores `value` under `key` stamped with `version`.
    ///
    /// Returns `false` without writing when the stored entry carries a higher
    /// version.
    async fn set(&self, key: &str, value: String, version: u64) -> Result<bool>;

    async fn stats(&self) -> Result<CacheStats>;
}
