//! Application Service Interfaces
//!
//! Contracts the transport layer depends on. Implementations live in
//! `crate::use_cases`.

use async_trait::async_trait;
use serde::Serialize;
use vsearch_domain::entities::ProductView;
use vsearch_domain::error::Result;
use vsearch_domain::value_objects::SearchOutcome;

// ============================================================================
// Search Service Interface
// ============================================================================

/// Search Service Interface
///
/// Ranks catalog products against an image or a text query.
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Find products visually similar to an image
    async fn search_by_image(&self, image_base64: &str, top_k: Option<i64>)
    -> Result<SearchOutcome>;

    /// Find product images matching a text description
    async fn search_by_text(&self, query: &str, top_k: Option<i64>) -> Result<SearchOutcome>;
}

// ============================================================================
// Catalog Service Interface
// ============================================================================

/// Catalog Service Interface
///
/// Vendor-side product lifecycle: add, list, delete and clear.
#[async_trait]
pub trait CatalogServiceInterface: Send + Sync {
    /// Embed and persist a new product
    async fn add_product(&self, name: &str, image_base64: &str) -> Result<ProductView>;

    /// Every product in creation order
    async fn list_products(&self) -> Result<Vec<ProductView>>;

    /// Number of products in the catalog
    async fn product_count(&self) -> Result<usize>;

    /// Delete a product; `NotFound` when it does not exist
    async fn delete_product(&self, id: &str) -> Result<()>;

    /// Delete every product, returning how many were removed
    async fn clear_catalog(&self) -> Result<usize>;
}

// ============================================================================
// Health Service Interface
// ============================================================================

/// Snapshot of service health
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Whether the embedding model answered its last (cached) probe
    pub embeddings_available: bool,
    /// Number of products in the catalog
    pub product_count: usize,
}

/// Health Service Interface
#[async_trait]
pub trait HealthServiceInterface: Send + Sync {
    /// Report current health, probing the embedding model at most once per TTL
    async fn check(&self) -> Result<HealthReport>;
}
