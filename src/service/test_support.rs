//! Failure-injecting wrappers around the in-memory backends.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::cache::{CacheEntry, CacheStats, KeyValueCache, MemoryCache};
use crate::catalog::{CatalogStore, FeaturedSet, MemoryCatalogStore};
use crate::error::{Result, StoreError};
use crate::media::{MediaHost, MemoryMediaHost};
use crate::models::{CreateProductRequest, Product, ProductDraft, ProductSummary};
use crate::service::CatalogService;

#[derive(Default)]
pub struct FlakyCatalog {
    pub inner: MemoryCatalogStore,
    pub offline: AtomicBool,
}

impl FlakyCatalog {
    fn check(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::Catalog("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

#[async_trait]
impl CatalogStore for FlakyCatalog {
    async fn find_all(&self) -> Result<Vec<Product>> {
        self.check()?;
        self.inner.find_all().await
    }

    async fn find_featured(&self) -> Result<FeaturedSet> {
        self.check()?;
        self.inner.find_featured().await
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.check()?;
        self.inner.find_by_category(category).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>> {
        self.check()?;
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product> {
        self.check()?;
        self.inner.insert(draft).await
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Product>> {
        self.check()?;
        self.inner.delete(id).await
    }

    async fn toggle_featured(&self, id: Uuid) -> Result<Option<Product>> {
        self.check()?;
        self.inner.toggle_featured(id).await
    }

    async fn sample(&self, size: usize) -> Result<Vec<ProductSummary>> {
        self.check()?;
        self.inner.sample(size).await
    }
}

#[derive(Default)]
pub struct FlakyCache {
    pub inner: MemoryCache,
    pub offline: AtomicBool,
}

impl FlakyCache {
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::Cache("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl KeyValueCache for FlakyCache {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        self.check()?;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String, version: u64) -> Result<bool> {
        self.check()?;
        self.inner.set(key, value, version).await
    }

    async fn stats(&self) -> Result<CacheStats> {
        self.inner.stats().await
    }
}

pub struct FlakyMedia {
    pub inner: MemoryMediaHost,
    pub fail_destroy: AtomicBool,
}

impl Default for FlakyMedia {
    fn default() -> Self {
        Self {
            inner: MemoryMediaHost::new("https://media.test"),
            fail_destroy: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl MediaHost for FlakyMedia {
    async fn upload(&self, payload: &str, folder: &str) -> Result<String> {
        self.inner.upload(payload, folder).await
    }

    async fn destroy(&self, public_id: &str) -> Result<()> {
        if self.fail_destroy.load(Ordering::SeqCst) {
            return Err(StoreError::Media("media host timed out".to_string()));
        }
        self.inner.destroy(public_id).await
    }
}

/// A service wired to flaky backends, with handles kept for the test.
pub struct Harness {
    pub service: CatalogService,
    pub catalog: Arc<FlakyCatalog>,
    pub cache: Arc<FlakyCache>,
    pub media: Arc<FlakyMedia>,
}

impl Harness {
    pub fn new() -> Self {
        let catalog = Arc::new(FlakyCatalog::default());
        let cache = Arc::new(FlakyCache::default());
        let media = Arc::new(FlakyMedia::default());
        let service = CatalogService::new(
            catalog.clone(),
            cache.clone(),
            media.clone(),
            "products",
        );
        Self {
            service,
            catalog,
            cache,
            media,
        }
    }
}

pub fn request(name: &str, category: &str, image: Option<&str>) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        description: format!("{} description", name),
        price: 10.0,
        image: image.map(str::to_string),
        category: category.to_string(),
    }
}
