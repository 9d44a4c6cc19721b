//! Catalog Service Use Case
//!
//! Vendor-side product lifecycle. A product only becomes durable after its
//! embedding is computed and its image is stored; image clean-up after a
//! delete is best-effort and never fails the delete itself.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use uuid::Uuid;
use vsearch_domain::entities::{Product, ProductView};
use vsearch_domain::error::{Error, Result};
use vsearch_domain::ports::providers::{EmbeddingProvider, ImageStorageProvider};
use vsearch_domain::repositories::ProductRepository;

use crate::ports::services::CatalogServiceInterface;

/// Catalog service implementation
pub struct CatalogServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    repository: Arc<dyn ProductRepository>,
    image_storage: Arc<dyn ImageStorageProvider>,
}

impl CatalogServiceImpl {
    /// Create new catalog service with injected dependencies
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        repository: Arc<dyn ProductRepository>,
        image_storage: Arc<dyn ImageStorageProvider>,
    ) -> Self {
        Self {
            embedding_provider,
            repository,
            image_storage,
        }
    }

    /// Remove a stored image, logging instead of failing
    async fn discard_image(&self, product_id: &str) {
        if let Err(e) = self.image_storage.delete(product_id).await {
            warn!(product_id, error = %e, "failed to delete product image");
        }
    }
}

#[async_trait]
impl CatalogServiceInterface for CatalogServiceImpl {
    async fn add_product(&self, name: &str, image_base64: &str) -> Result<ProductView> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::invalid_argument("Product name is required"));
        }
        if image_base64.is_empty() {
            return Err(Error::invalid_argument("Image is required"));
        }

        let id = Uuid::new_v4().to_string();
        info!(product_id = %id, name, "adding product");

        let embedding = self.embedding_provider.embed_image(image_base64).await?;
        let image = self.image_storage.store(&id, image_base64).await?;

        let product = Product::new(id.clone(), name, image, embedding.into_vector());
        match self.repository.add(product).await {
            Ok(stored) => {
                debug!(product_id = %stored.id, "product stored");
                Ok(stored.view())
            }
            Err(e) => {
                // No record exists, so the stored image must not linger
                self.discard_image(&id).await;
                Err(e)
            }
        }
    }

    async fn list_products(&self) -> Result<Vec<ProductView>> {
        let products = self.repository.list().await?;
        debug!(count = products.len(), "listing products");
        Ok(products)
    }

    async fn product_count(&self) -> Result<usize> {
        self.repository.count().await
    }

    async fn delete_product(&self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(Error::invalid_argument("Product id is required"));
        }

        if !self.repository.delete(id).await? {
            return Err(Error::not_found("Product"));
        }
        info!(product_id = id, "product deleted");

        self.discard_image(id).await;
        Ok(())
    }

    async fn clear_catalog(&self) -> Result<usize> {
        let removed = self.repository.clear().await?;
        for id in &removed {
            self.discard_image(id).await;
        }
        info!(count = removed.len(), "catalog cleared");
        Ok(removed.len())
    }
}
