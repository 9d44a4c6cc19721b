//! In-memory product repository (linear scan)
//!
//! Holds the whole catalog in memory and ranks by scoring every product.
//! Optionally mirrors the catalog to a JSON file: the file is read once at
//! startup and fully rewritten (temp file + rename) on every mutation while
//! the write lock is held, so the file always matches a committed state.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use vsearch_domain::entities::{Product, ProductView};
use vsearch_domain::error::{Error, Result};
use vsearch_domain::repositories::ProductRepository;
use vsearch_domain::similarity::{round_score, top_k_similar};
use vsearch_domain::value_objects::SearchResult;

/// In-memory product repository
///
/// Correct at any scale but O(N·D) per query; intended for small catalogs,
/// development and tests.
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
    dimensions: usize,
    data_file: Option<PathBuf>,
}

impl InMemoryProductRepository {
    /// Create an empty, non-persistent repository
    pub fn new(dimensions: usize) -> Self {
        Self {
            products: RwLock::new(Vec::new()),
            dimensions,
            data_file: None,
        }
    }

    /// Create a repository mirrored to `path`, loading any existing catalog
    ///
    /// A missing file starts an empty catalog. An unreadable or malformed
    /// file, or a stored embedding of the wrong length, is an error.
    pub fn with_data_file(dimensions: usize, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let products = load_products(&path)?;

        if let Some(bad) = products.iter().find(|p| p.embedding.len() != dimensions) {
            return Err(Error::dimension_mismatch(dimensions, bad.embedding.len()));
        }

        info!(
            path = %path.display(),
            count = products.len(),
            "loaded product catalog"
        );
        Ok(Self {
            products: RwLock::new(products),
            dimensions,
            data_file: Some(path),
        })
    }

    /// Path of the JSON mirror, if any
    pub fn data_file(&self) -> Option<&Path> {
        self.data_file.as_deref()
    }

    /// Rewrite the mirror file with `products`
    async fn persist(&self, products: &[Product]) -> Result<()> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };

        let data = serde_json::to_string_pretty(products)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::storage_with_source(
                    format!("Failed to create data directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, data).await.map_err(|e| {
            Error::storage_with_source(format!("Failed to write {}", tmp.display()), e)
        })?;
        tokio::fs::rename(&tmp, path).await.map_err(|e| {
            Error::storage_with_source(format!("Failed to replace {}", path.display()), e)
        })?;

        debug!(count = products.len(), "saved product catalog");
        Ok(())
    }
}

fn load_products(path: &Path) -> Result<Vec<Product>> {
    if !path.exists() {
        info!(path = %path.display(), "no existing catalog file, starting fresh");
        return Ok(Vec::new());
    }

    let data = std::fs::read_to_string(path).map_err(|e| {
        Error::storage_with_source(format!("Failed to read {}", path.display()), e)
    })?;
    serde_json::from_str(&data).map_err(|e| {
        Error::storage_with_source(format!("Malformed catalog file {}", path.display()), e)
    })
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn add(&self, product: Product) -> Result<Product> {
        if product.embedding.len() != self.dimensions {
            return Err(Error::dimension_mismatch(
                self.dimensions,
                product.embedding.len(),
            ));
        }

        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id == product.id) {
            return Err(Error::invalid_argument(format!(
                "Product '{}' already exists",
                product.id
            )));
        }

        products.push(product.clone());
        if let Err(e) = self.persist(&products).await {
            products.pop();
            return Err(e);
        }
        Ok(product)
    }

    async fn list(&self) -> Result<Vec<ProductView>> {
        let products = self.products.read().await;
        let mut views: Vec<ProductView> = products.iter().map(ProductView::from).collect();
        views.sort_by_key(|p| p.created_at);
        Ok(views)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.products.read().await.len())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut products = self.products.write().await;
        let Some(position) = products.iter().position(|p| p.id == id) else {
            return Ok(false);
        };

        let removed = products.remove(position);
        if let Err(e) = self.persist(&products).await {
            products.insert(position, removed);
            return Err(e);
        }
        Ok(true)
    }

    async fn clear(&self) -> Result<Vec<String>> {
        let mut products = self.products.write().await;
        let removed = std::mem::take(&mut *products);
        if let Err(e) = self.persist(&products).await {
            *products = removed;
            return Err(e);
        }
        Ok(removed.into_iter().map(|p| p.id).collect())
    }

    async fn find_similar(&self, query_vector: &[f32], top_k: usize) -> Result<Vec<SearchResult>> {
        let products = self.products.read().await;
        let ranked = top_k_similar(query_vector, &products, |p| p.embedding.as_slice(), top_k)?;

        Ok(ranked
            .into_iter()
            .map(|(product, score)| SearchResult::new(product, round_score(score)))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use vsearch_application::ports::registry::{
    PRODUCT_REPOSITORIES, ProductRepositoryConfig, ProductRepositoryEntry,
};
use vsearch_domain::constants::EMBEDDING_DIMENSIONS_DEFAULT;

/// Factory function for creating in-memory repository instances.
fn in_memory_repository_factory(
    config: &ProductRepositoryConfig,
) -> std::result::Result<Arc<dyn ProductRepository>, String> {
    let dimensions = config.dimensions.unwrap_or(EMBEDDING_DIMENSIONS_DEFAULT);
    let repository = match &config.data_file {
        Some(path) => InMemoryProductRepository::with_data_file(dimensions, path)
            .map_err(|e| format!("Failed to open catalog file: {e}"))?,
        None => InMemoryProductRepository::new(dimensions),
    };
    Ok(Arc::new(repository))
}

#[linkme::distributed_slice(PRODUCT_REPOSITORIES)]
static MEMORY_REPOSITORY: ProductRepositoryEntry = ProductRepositoryEntry {
    name: "memory",
    description: "In-memory linear scan, optionally mirrored to a JSON file",
    factory: in_memory_repository_factory,
};
