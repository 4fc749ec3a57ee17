//! Data shapes for the storefront
//!
//! The persisted `Product` model plus the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::{Product, ProductDraft, ProductSummary};
pub use requests::{CreateProductRequest, RecommendationQuery};
pub use responses::{
    CacheStatsResponse, ErrorResponse, HealthResponse, MessageResponse, ProductListResponse,
};
