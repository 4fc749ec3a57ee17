//! API Handlers
//!
//! HTTP request handlers for each storefront endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{AdminGuard, JsonBody, QueryParams};
use crate::cache::MemoryCache;
use crate::catalog::MemoryCatalogStore;
use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::media::MemoryMediaHost;
use crate::models::{
    CacheStatsResponse, CreateProductRequest, HealthResponse, MessageResponse, Product,
    ProductListResponse, ProductSummary, RecommendationQuery,
};
use crate::service::CatalogService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: CatalogService,
    /// Bearer token accepted by [`AdminGuard`]
    pub admin_token: Arc<String>,
}

impl AppState {
    pub fn new(service: CatalogService, admin_token: impl Into<String>) -> Self {
        Self {
            service,
            admin_token: Arc::new(admin_token.into()),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires the service to the in-process catalog store, cache and media host.
    pub fn from_config(config: &Config) -> Self {
        let service = CatalogService::new(
            Arc::new(MemoryCatalogStore::new()),
            Arc::new(MemoryCache::new()),
            Arc::new(MemoryMediaHost::new(config.media_base_url.clone())),
            config.media_folder.clone(),
        );
        Self::new(service, config.admin_token.clone())
    }
}

fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| StoreError::InvalidRequest(format!("Invalid product id '{}'", raw)))
}

/// Handler for GET /products (admin)
pub async fn list_products_handler(
    State(state): State<AppState>,
    _admin: AdminGuard,
) -> Result<Json<ProductListResponse>> {
    let products = state.service.list_all().await?;
    Ok(Json(ProductListResponse::new(products)))
}

/// Handler for GET /products/featured
pub async fn featured_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.service.list_featured().await?))
}

/// Handler for GET /products/category/:category
pub async fn products_by_category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<ProductListResponse>> {
    let products = state.service.list_by_category(&category).await?;
    Ok(Json(ProductListResponse::new(products)))
}

/// Handler for GET /products/recommendations
pub async fn recommended_products_handler(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<RecommendationQuery>,
) -> Result<Json<Vec<ProductSummary>>> {
    Ok(Json(state.service.sample_random(query.sample_size()).await?))
}

/// Handler for POST /products (admin)
pub async fn create_product_handler(
    State(state): State<AppState>,
    _admin: AdminGuard,
    JsonBody(req): JsonBody<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.service.create(req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for DELETE /products/:id (admin)
pub async fn delete_product_handler(
    State(state): State<AppState>,
    _admin: AdminGuard,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.service.delete(parse_id(&id)?).await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

/// Handler for PATCH /products/:id (admin)
pub async fn toggle_featured_handler(
    State(state): State<AppState>,
    _admin: AdminGuard,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    Ok(Json(state.service.toggle_featured(parse_id(&id)?).await?))
}

/// Handler for GET /products/cache/stats (admin)
pub async fn cache_stats_handler(
    State(state): State<AppState>,
    _admin: AdminGuard,
) -> Result<Json<CacheStatsResponse>> {
    let stats = state.service.cache_stats().await?;
    Ok(Json(CacheStatsResponse {
        hits: stats.hits,
        misses: stats.misses,
        writes: stats.writes,
        stale_writes: stats.stale_writes,
        hit_rate: stats.hit_rate(),
    }))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::from_config(&Config::default())
    }

    fn rook() -> CreateProductRequest {
        CreateProductRequest {
            name: "Rook".to_string(),
            description: "Heavy piece".to_string(),
            price: 10.0,
            image: None,
            category: "chess".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_by_category() {
        let state = test_state();

        let (status, created) =
            create_product_handler(State(state.clone()), AdminGuard, JsonBody(rook()))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert!(!created.is_featured);

        let listed = products_by_category_handler(State(state), Path("chess".to_string()))
            .await
            .unwrap();
        assert_eq!(listed.products, vec![created.0]);
    }

    #[tokio::test]
    async fn test_toggle_invalid_id() {
        let state = test_state();

        let result =
            toggle_featured_handler(State(state), AdminGuard, Path("not-a-uuid".to_string())).await;
        assert!(matches!(result, Err(StoreError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_product() {
        let state = test_state();

        let result = delete_product_handler(
            State(state),
            AdminGuard,
            Path(Uuid::new_v4().to_string()),
        )
        .await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_recommendations_default_size() {
        let state = test_state();
        for _ in 0..3 {
            let (status, _) =
                create_product_handler(State(state.clone()), AdminGuard, JsonBody(rook()))
                    .await
                    .unwrap();
            assert_eq!(status, StatusCode::CREATED);
        }

        let picked =
            recommended_products_handler(State(state), QueryParams(RecommendationQuery::default()))
                .await
                .unwrap();
        assert_eq!(picked.len(), 2);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
