//! In-memory catalog store
//!
//! Products are kept in insertion order in a `Vec` guarded by a
//! `tokio::sync::RwLock`. Not durable: all state is lost on restart.

use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::catalog::{CatalogStore, FeaturedSet};
use crate::error::Result;
use crate::models::{Product, ProductDraft, ProductSummary};

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    featured_version: u64,
}

impl Inner {
    fn position(&self, id: Uuid) -> Option<usize> {
        self.products.iter().position(|product| product.id == id)
    }
}

// == Memory Catalog Store ==
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    inner: RwLock<Inner>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products.
    pub async fn len(&self) -> usize {
        self.inner.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.products.is_empty()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.inner.read().await.products.clone())
    }

    async fn find_featured(&self) -> Result<FeaturedSet> {
        let inner = self.inner.read().await;
        Ok(FeaturedSet {
            products: inner
                .products
                .iter()
                .filter(|product| product.is_featured)
                .cloned()
                .collect(),
            version: inner.featured_version,
        })
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>> {
        Ok(self
            .inner
            .read()
            .await
            .products
            .iter()
            .filter(|product| product.category == category)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.position(id).map(|index| inner.products[index].clone()))
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product> {
        let product = Product::from_draft(draft);
        self.inner.write().await.products.push(product.clone());
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Product>> {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.position(id) else {
            return Ok(None);
        };
        let removed = inner.products.remove(index);
        if removed.is_featured {
            inner.featured_version += 1;
        }
        Ok(Some(removed))
    }

    async fn toggle_featured(&self, id: Uuid) -> Result<Option<Product>> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;
        let Some(index) = inner.position(id) else {
            return Ok(None);
        };
        let product = &mut inner.products[index];
        product.is_featured = !product.is_featured;
        product.updated_at = Utc::now();
        inner.featured_version += 1;
        Ok(Some(product.clone()))
    }

    async fn sample(&self, size: usize) -> Result<Vec<ProductSummary>> {
        let inner = self.inner.read().await;
        let mut rng = rand::thread_rng();
        Ok(inner
            .products
            .choose_multiple(&mut rng, size)
            .map(ProductSummary::from)
            .collect())
    }
}
