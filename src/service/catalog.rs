//! Catalog Service
//!
//! Product lifecycle operations over the catalog store, keeping the featured
//! products snapshot in the key-value cache under a cache-aside policy:
//! reads fill the cache on a miss, and every change to the featured set
//! triggers a rebuild. Snapshots are stamped with the store's featured
//! version so concurrent rebuilds cannot roll the cache back.

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::cache::{CacheStats, KeyValueCache, FEATURED_PRODUCTS_KEY};
use crate::catalog::{CatalogStore, FeaturedSet};
use crate::error::{Result, StoreError};
use crate::media::{public_id_from_url, MediaHost};
use crate::models::{CreateProductRequest, Product, ProductDraft, ProductSummary};

// == Catalog Service ==
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn CatalogStore>,
    cache: Arc<dyn KeyValueCache>,
    media: Arc<dyn MediaHost>,
    /// Media host folder that product images are uploaded into
    media_folder: String,
}

impl CatalogService {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        cache: Arc<dyn KeyValueCache>,
        media: Arc<dyn MediaHost>,
        media_folder: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            cache,
            media,
            media_folder: media_folder.into(),
        }
    }

    // == List All ==
    /// Every product in the catalog, unfiltered and unpaginated.
    pub async fn list_all(&self) -> Result<Vec<Product>> {
        self.catalog
            .find_all()
            .await
            .inspect_err(|err| error!(operation = "list_all", error = %err, "Catalog operation failed"))
    }

    // == List Featured ==
    /// Featured products, served from the cached snapshot when present.
    ///
    /// A snapshot is returned verbatim without a freshness check. On a miss
    /// the store is queried and the result written back; a failed write is
    /// logged and does not fail the read. An empty featured set is returned
    /// as an empty list on both paths.
    pub async fn list_featured(&self) -> Result<Vec<Product>> {
        match self.cache.get(FEATURED_PRODUCTS_KEY).await {
            Ok(Some(entry)) => match serde_json::from_str::<Vec<Product>>(&entry.value) {
                Ok(products) => {
                    debug!(version = entry.version, "Featured products served from cache");
                    return Ok(products);
                }
                Err(err) => warn!(error = %err, "Discarding unreadable featured snapshot"),
            },
            Ok(None) => debug!("Featured products cache miss"),
            Err(err) => warn!(error = %err, "Featured cache read failed, querying catalog store"),
        }

        let featured = self.catalog.find_featured().await.inspect_err(|err| {
            error!(operation = "list_featured", error = %err, "Catalog operation failed")
        })?;
        self.write_snapshot(&featured).await;
        Ok(featured.products)
    }

    // == Create ==
    /// Validates the request, uploads the image if one was supplied, and
    /// persists the product.
    pub async fn create(&self, request: CreateProductRequest) -> Result<Product> {
        if let Some(message) = request.validate() {
            return Err(StoreError::InvalidRequest(message));
        }

        let image = match request.image_payload() {
            Some(payload) => self
                .media
                .upload(payload, &self.media_folder)
                .await
                .inspect_err(|err| {
                    error!(operation = "create", error = %err, "Image upload failed")
                })?,
            None => String::new(),
        };

        let draft = ProductDraft {
            name: request.name,
            description: request.description,
            price: request.price,
            image,
            category: request.category,
        };
        let uploaded = draft.image.clone();

        match self.catalog.insert(draft).await {
            Ok(product) => {
                info!(id = %product.id, name = %product.name, "Product created");
                Ok(product)
            }
            Err(err) => {
                error!(operation = "create", error = %err, "Catalog operation failed");
                if !uploaded.is_empty() {
                    self.discard_image(&uploaded).await;
                }
                Err(err)
            }
        }
    }

    // == Delete ==
    /// Deletes a product and its hosted image.
    ///
    /// The image is destroyed first; if the media host fails, the product is
    /// left in place and the failure returned.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let product = self
            .catalog
            .find_by_id(id)
            .await
            .inspect_err(|err| error!(operation = "delete", error = %err, "Catalog operation failed"))?
            .ok_or_else(|| StoreError::NotFound(format!("Product {}", id)))?;

        if product.has_image() {
            match public_id_from_url(&product.image) {
                Some(name) => {
                    let public_id = format!("{}/{}", self.media_folder, name);
                    self.media.destroy(&public_id).await.inspect_err(|err| {
                        error!(operation = "delete", %id, error = %err, "Image delete failed, product kept")
                    })?;
                    debug!(public_id = %public_id, "Product image deleted");
                }
                None => warn!(%id, image = %product.image, "Cannot derive media id from image URL"),
            }
        }

        let removed = self
            .catalog
            .delete(id)
            .await
            .inspect_err(|err| error!(operation = "delete", error = %err, "Catalog operation failed"))?
            .ok_or_else(|| StoreError::NotFound(format!("Product {}", id)))?;

        info!(%id, "Product deleted");
        if removed.is_featured {
            self.rebuild_featured_cache().await;
        }
        Ok(())
    }

    // == Sample Random ==
    /// Up to `size` distinct products chosen at random, as summaries.
    pub async fn sample_random(&self, size: usize) -> Result<Vec<ProductSummary>> {
        self.catalog
            .sample(size)
            .await
            .inspect_err(|err| error!(operation = "sample_random", error = %err, "Catalog operation failed"))
    }

    // == List By Category ==
    /// Products whose category matches exactly, featured or not.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.catalog.find_by_category(category).await.inspect_err(|err| {
            error!(operation = "list_by_category", category, error = %err, "Catalog operation failed")
        })
    }

    // == Toggle Featured ==
    /// Flips `is_featured`, then rebuilds the featured snapshot.
    ///
    /// A failed rebuild is logged only; the store already holds the change.
    pub async fn toggle_featured(&self, id: Uuid) -> Result<Product> {
        let product = self
            .catalog
            .toggle_featured(id)
            .await
            .inspect_err(|err| {
                error!(operation = "toggle_featured", error = %err, "Catalog operation failed")
            })?
            .ok_or_else(|| StoreError::NotFound(format!("Product {}", id)))?;

        info!(%id, featured = product.is_featured, "Product featured flag toggled");
        self.rebuild_featured_cache().await;
        Ok(product)
    }

    // == Rebuild ==
    /// Re-queries the featured set and overwrites the cached snapshot.
    ///
    /// Never fails; errors are logged and the previous snapshot stays.
    pub async fn rebuild_featured_cache(&self) {
        match self.catalog.find_featured().await {
            Ok(featured) => {
                self.write_snapshot(&featured).await;
            }
            Err(err) => warn!(error = %err, "Featured cache rebuild failed"),
        }
    }

    pub async fn cache_stats(&self) -> Result<CacheStats> {
        self.cache
            .stats()
            .await
            .inspect_err(|err| error!(operation = "cache_stats", error = %err, "Cache operation failed"))
    }

    /// Writes a featured snapshot stamped with its version. Failures are
    /// logged only.
    async fn write_snapshot(&self, featured: &FeaturedSet) {
        let value = match serde_json::to_string(&featured.products) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "Failed to serialize featured snapshot");
                return;
            }
        };

        match self
            .cache
            .set(FEATURED_PRODUCTS_KEY, value, featured.version)
            .await
        {
            Ok(true) => debug!(
                version = featured.version,
                count = featured.products.len(),
                "Featured snapshot written"
            ),
            Ok(false) => debug!(version = featured.version, "Newer featured snapshot already cached"),
            Err(err) => warn!(error = %err, "Failed to write featured snapshot"),
        }
    }

    /// Best-effort cleanup of an image whose product was never stored.
    async fn discard_image(&self, url: &str) {
        let Some(name) = public_id_from_url(url) else {
            return;
        };
        let public_id = format!("{}/{}", self.media_folder, name);
        if let Err(err) = self.media.destroy(&public_id).await {
            warn!(public_id = %public_id, error = %err, "Failed to discard orphaned image");
        }
    }
}
