//! Storefront - product catalog backend
//!
//! Product CRUD, category browsing and recommendations over a catalog store,
//! with the featured products list cached under a cache-aside policy.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod media;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use service::CatalogService;
