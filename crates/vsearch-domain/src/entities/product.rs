//! Product entity and its wire-facing view

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::ImageReference;

/// Entity: Catalog Product
///
/// A product uploaded by a vendor, together with the embedding of its image.
///
/// ## Business Rules
///
/// - `id` is assigned at creation and never changes
/// - `name` is non-empty after trimming
/// - `embedding` has the repository's configured length
/// - Products are never mutated; they are created and deleted only
///
/// Serialized with camelCase keys and the image reference flattened, e.g.
/// `{"id", "name", "imageUrl", "embedding", "createdAt"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Display name
    pub name: String,
    /// Inline payload or external URL of the product image
    #[serde(flatten)]
    pub image: ImageReference,
    /// Image embedding used for similarity ranking
    pub embedding: Vec<f32>,
    /// Creation timestamp, defines list order
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a product stamped with the current time
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image: ImageReference,
        embedding: Vec<f32>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image,
            embedding,
            created_at: Utc::now(),
        }
    }

    /// Override the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Project the product to its public shape (no embedding)
    pub fn view(&self) -> ProductView {
        ProductView::from(self)
    }
}

/// A product as returned to clients: every field except the embedding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub image: ImageReference,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            created_at: product.created_at,
        }
    }
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            image: product.image,
            created_at: product.created_at,
        }
    }
}
