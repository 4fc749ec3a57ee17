//! Catalog Module
//!
//! The durable product store port and its in-memory backend. The store is
//! the source of truth; the featured cache snapshot is derived from it.

mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Product, ProductDraft, ProductSummary};

pub use memory::MemoryCatalogStore;

/// Featured products together with the store's featured version.
///
/// Both are read atomically, so the version identifies exactly this set.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedSet {
    pub products: Vec<Product>,
    pub version: u64,
}

// == Catalog Store ==
/// Product persistence.
///
/// `featured_version` is monotonic and increases whenever the set of
/// featured products changes.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Every product, in store order.
    async fn find_all(&self) -> Result<Vec<Product>>;

    /// Every product with `is_featured = true`, plus the current featured version.
    async fn find_featured(&self) -> Result<FeaturedSet>;

    /// Products whose category equals `category` exactly (case-sensitive).
    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>>;

    /// Persists a new product and returns it with its assigned id.
    async fn insert(&self, draft: ProductDraft) -> Result<Product>;

    /// Removes a product, returning it if it existed.
    async fn delete(&self, id: Uuid) -> Result<Option<Product>>;

    /// Flips `is_featured` and returns the updated product, or None if absent.
    async fn toggle_featured(&self, id: Uuid) -> Result<Option<Product>>;

    /// Up to `size` distinct products chosen at random, projected to summaries.
    async fn sample(&self, size: usize) -> Result<Vec<ProductSummary>>;
}
