//! Request DTOs for the storefront API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

/// Default number of recommended products.
pub const DEFAULT_RECOMMENDATIONS: usize = 2;

/// Upper bound on `?size=` for recommendations.
pub const MAX_RECOMMENDATIONS: usize = 20;

/// Request body for product creation (POST /products)
///
/// # Fields
/// - `image`: optional image payload (data URI or raw bytes as text) to upload
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    pub category: String,
}

impl CreateProductRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if self.description.trim().is_empty() {
            return Some("Description cannot be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Some("Category cannot be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("Price must be a non-negative number".to_string());
        }
        None
    }

    /// Returns the image payload, treating an empty string as absent.
    pub fn image_payload(&self) -> Option<&str> {
        self.image.as_deref().filter(|payload| !payload.is_empty())
    }
}

/// Query string for GET /products/recommendations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default)]
    pub size: Option<usize>,
}

impl RecommendationQuery {
    /// Sample size, defaulting to 2 and clamped to 1..=20.
    pub fn sample_size(&self) -> usize {
        self.size
            .unwrap_or(DEFAULT_RECOMMENDATIONS)
            .clamp(1, MAX_RECOMMENDATIONS)
    }
}
