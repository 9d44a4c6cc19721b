//! Application bootstrap
//!
//! Resolves the configured providers from the linkme registries and wires
//! them into the use case services.
//!
//! ```text
//! AppConfig → provider_resolvers → providers → services → AppContext
//!                     ↑
//!                  linkme
//!                 registry
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(config).await?;
//! let outcome = context.search().search_by_text("red sneakers", Some(5)).await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use vsearch_application::ports::services::{
    CatalogServiceInterface, HealthServiceInterface, SearchServiceInterface,
};
use vsearch_application::use_cases::{CatalogServiceImpl, HealthServiceImpl, SearchServiceImpl};
use vsearch_domain::error::{Error, Result};
use vsearch_domain::ports::providers::{EmbeddingProvider, ImageStorageProvider};
use vsearch_domain::repositories::ProductRepository;

use crate::config::AppConfig;
use crate::di::provider_resolvers::{resolve_embedding, resolve_image_storage, resolve_repository};

/// Application context: resolved providers and the services built on them
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    embedding: Arc<dyn EmbeddingProvider>,
    repository: Arc<dyn ProductRepository>,
    image_storage: Arc<dyn ImageStorageProvider>,

    search: Arc<dyn SearchServiceInterface>,
    catalog: Arc<dyn CatalogServiceInterface>,
    health: Arc<dyn HealthServiceInterface>,
}

impl AppContext {
    /// Get embedding provider
    pub fn embedding(&self) -> Arc<dyn EmbeddingProvider> {
        self.embedding.clone()
    }

    /// Get product repository
    pub fn repository(&self) -> Arc<dyn ProductRepository> {
        self.repository.clone()
    }

    /// Get image storage provider
    pub fn image_storage(&self) -> Arc<dyn ImageStorageProvider> {
        self.image_storage.clone()
    }

    /// Get search service
    pub fn search(&self) -> Arc<dyn SearchServiceInterface> {
        self.search.clone()
    }

    /// Get catalog service
    pub fn catalog(&self) -> Arc<dyn CatalogServiceInterface> {
        self.catalog.clone()
    }

    /// Get health service
    pub fn health(&self) -> Arc<dyn HealthServiceInterface> {
        self.health.clone()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("embedding", &self.embedding.provider_name())
            .field("repository", &self.repository.provider_name())
            .field("image_storage", &self.image_storage.provider_name())
            .finish_non_exhaustive()
    }
}

/// Initialize application context from configuration
///
/// Fails when a provider name is unknown, a provider cannot be created, or
/// the embedding length differs from the repository's.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");

    let config = Arc::new(config);

    let embedding = resolve_embedding(&config)?;
    let image_storage = resolve_image_storage(&config)?;

    // Repository factories may block on I/O (catalog file, database pool)
    let repository_config = config.clone();
    let repository = tokio::task::spawn_blocking(move || resolve_repository(&repository_config))
        .await
        .map_err(|e| Error::internal(format!("Repository initialization failed: {e}")))??;

    if embedding.dimensions() != repository.dimensions() {
        return Err(Error::configuration(format!(
            "Embedding provider produces {} dimensions but the repository stores {}",
            embedding.dimensions(),
            repository.dimensions()
        )));
    }

    info!(
        "Resolved providers: embedding={}, repository={}, image_storage={}",
        embedding.provider_name(),
        repository.provider_name(),
        image_storage.provider_name()
    );

    let search: Arc<dyn SearchServiceInterface> = Arc::new(
        SearchServiceImpl::new(embedding.clone(), repository.clone())
            .with_limits(config.search.default_top_k, config.search.max_top_k),
    );
    let catalog: Arc<dyn CatalogServiceInterface> = Arc::new(CatalogServiceImpl::new(
        embedding.clone(),
        repository.clone(),
        image_storage.clone(),
    ));
    let health: Arc<dyn HealthServiceInterface> = Arc::new(HealthServiceImpl::new(
        embedding.clone(),
        repository.clone(),
        Duration::from_secs(config.embedding.health_cache_ttl_secs),
    ));

    Ok(AppContext {
        config,
        embedding,
        repository,
        image_storage,
        search,
        catalog,
        health,
    })
}

/// Initialize an offline application for testing
///
/// Deterministic embeddings, a non-persistent in-memory catalog and inline
/// image storage.
pub async fn init_test_app() -> Result<AppContext> {
    let mut config = AppConfig::default();
    config.embedding.provider = "null".to_string();
    config.repository.data_file = None;
    init_app(config).await
}
