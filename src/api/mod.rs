//! API Module
//!
//! HTTP handlers, routing and the admin guard for the storefront REST API.
//!
//! # Endpoints
//! - `GET /products`, `POST /products` - admin only
//! - `GET /products/featured` - featured products
//! - `GET /products/category/:category` - products by category
//! - `GET /products/recommendations` - random product summaries
//! - `PATCH /products/:id`, `DELETE /products/:id` - admin only
//! - `GET /health` - Health check endpoint

pub mod auth;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use auth::AdminGuard;
pub use extract::{JsonBody, QueryParams};
pub use handlers::*;
pub use routes::create_router;
