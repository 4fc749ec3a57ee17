//! API Routes
//!
//! Configures the Axum router with all storefront endpoints.

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, create_product_handler, delete_product_handler,
    featured_products_handler, health_handler, list_products_handler,
    products_by_category_handler, recommended_products_handler, toggle_featured_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /products` - All products (admin)
/// - `POST /products` - Create a product (admin)
/// - `GET /products/featured` - Featured products, cache-aside
/// - `GET /products/category/:category` - Products in a category
/// - `GET /products/recommendations` - Random product summaries
/// - `GET /products/cache/stats` - Featured cache counters (admin)
/// - `PATCH /products/:id` - Toggle the featured flag (admin)
/// - `DELETE /products/:id` - Delete a product and its image (admin)
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let products = Router::new()
        .route("/", get(list_products_handler).post(create_product_handler))
        .route("/featured", get(featured_products_handler))
        .route("/category/:category", get(products_by_category_handler))
        .route("/recommendations", get(recommended_products_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route(
            "/:id",
            patch(toggle_featured_handler).delete(delete_product_handler),
        );

    Router::new()
        .nest("/products", products)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
