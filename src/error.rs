//! Error types for the storefront
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Unified error type for catalog operations and the HTTP boundary.
///
/// Each variant maps to its own status code and machine-readable `code`.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Product (or other resource) does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request body failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No credentials were supplied
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Credentials were supplied but do not grant the admin role
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The catalog store failed or is unreachable
    #[error("Catalog store error: {0}")]
    Catalog(String),

    /// The key-value cache failed or is unreachable
    #[error("Cache error: {0}")]
    Cache(String),

    /// The media host rejected an upload or delete
    #[error("Media host error: {0}")]
    Media(String),
}

impl StoreError {
    /// Stable identifier for the error kind, returned to callers.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "not_found",
            StoreError::InvalidRequest(_) => "invalid_request",
            StoreError::Unauthorized(_) => "unauthorized",
            StoreError::Forbidden(_) => "forbidden",
            StoreError::Catalog(_) => "catalog_unavailable",
            StoreError::Cache(_) => "cache_unavailable",
            StoreError::Media(_) => "media_failure",
        }
    }

    /// HTTP status for the error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            StoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            StoreError::Forbidden(_) => StatusCode::FORBIDDEN,
            StoreError::Catalog(_) | StoreError::Cache(_) => StatusCode::SERVICE_UNAVAILABLE,
            StoreError::Media(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

// == Extractor Rejections ==
impl From<JsonRejection> for StoreError {
    fn from(rejection: JsonRejection) -> Self {
        StoreError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for StoreError {
    fn from(rejection: QueryRejection) -> Self {
        StoreError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string(), self.code()));
        (self.status(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the storefront.
pub type Result<T> = std::result::Result<T, StoreError>;
