//! Product data shapes
//!
//! `Product` is the persisted record. `ProductDraft` is what the service hands
//! the catalog store on creation, and `ProductSummary` is the projection
//! returned by recommendations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Product ==
/// A persisted catalog product.
///
/// `id` is assigned by the catalog store and never changes. `is_featured`
/// is the only field the service mutates after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Media host URL, empty when the product has no image
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Builds a new record from a draft with a freshly assigned id.
    pub fn from_draft(draft: ProductDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image: draft.image,
            category: draft.category,
            is_featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if an externally hosted image is attached.
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

// == Product Draft ==
/// Fields supplied on creation, after any image upload has been resolved to a URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

// == Product Summary ==
/// Projection used by recommendations: id, name, description, image and price only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price: product.price,
        }
    }
}
