//! Response DTOs for the storefront API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use super::Product;

/// Response body wrapping a product list (GET /products, GET /products/category/:category)
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
}

impl ProductListResponse {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

/// Plain confirmation message (DELETE /products/:id)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the featured cache stats endpoint (GET /products/cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub writes: u64,
    pub stale_writes: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
    /// Machine-readable error kind
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_list_wraps_in_products_key() {
        let json = serde_json::to_value(ProductListResponse::new(vec![])).unwrap();
        assert!(json["products"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Product not found", "not_found");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["error"], "Product not found");
        assert_eq!(json["code"], "not_found");
    }
}
