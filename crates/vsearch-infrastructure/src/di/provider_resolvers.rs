//! Provider Resolvers
//!
//! Convert configuration sections into registry configs and resolve the
//! named provider through the linkme registry.

use std::sync::Arc;
use std::time::Duration;

use vsearch_application::ports::registry::{
    EmbeddingProviderConfig, ImageStorageProviderConfig, ProductRepositoryConfig,
    resolve_embedding_provider, resolve_image_storage_provider, resolve_product_repository,
};
use vsearch_domain::error::{Error, Result};
use vsearch_domain::ports::providers::{EmbeddingProvider, ImageStorageProvider};
use vsearch_domain::repositories::ProductRepository;

use crate::config::{AppConfig, EmbeddingConfig, ImageStorageConfig, RepositoryConfig};

/// Build the embedding registry config
pub fn embedding_config_to_registry(config: &EmbeddingConfig) -> EmbeddingProviderConfig {
    EmbeddingProviderConfig {
        provider: config.provider.clone(),
        base_url: config.base_url.clone(),
        dimensions: Some(config.dimensions),
        timeout: Some(Duration::from_secs(config.timeout_secs)),
    }
}

/// Build the repository registry config
///
/// The repository shares the embedding length so stored vectors and query
/// vectors always agree.
pub fn repository_config_to_registry(config: &AppConfig) -> ProductRepositoryConfig {
    let repository: &RepositoryConfig = &config.repository;
    ProductRepositoryConfig {
        provider: repository.provider.clone(),
        dimensions: Some(config.embedding.dimensions),
        data_file: repository.data_file.clone(),
        database_url: repository.database_url.clone(),
        max_connections: Some(repository.max_connections),
        connection_timeout: Some(Duration::from_secs(repository.connection_timeout_secs)),
    }
}

/// Build the image storage registry config
pub fn image_storage_config_to_registry(config: &ImageStorageConfig) -> ImageStorageProviderConfig {
    ImageStorageProviderConfig {
        provider: config.provider.clone(),
        directory: config.directory.clone(),
        public_base_url: config.public_base_url.clone(),
        url: config.supabase_url.clone(),
        api_key: config.api_key.clone(),
        bucket: Some(config.bucket.clone()),
    }
}

/// Resolve the configured embedding provider
pub fn resolve_embedding(config: &AppConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    resolve_embedding_provider(&embedding_config_to_registry(&config.embedding))
        .map_err(|e| Error::configuration(format!("Embedding: {e}")))
}

/// Resolve the configured product repository
///
/// Database-backed factories connect synchronously, so call this off the
/// async executor.
pub fn resolve_repository(config: &AppConfig) -> Result<Arc<dyn ProductRepository>> {
    resolve_product_repository(&repository_config_to_registry(config))
        .map_err(|e| Error::configuration(format!("Repository: {e}")))
}

/// Resolve the configured image storage provider
pub fn resolve_image_storage(config: &AppConfig) -> Result<Arc<dyn ImageStorageProvider>> {
    resolve_image_storage_provider(&image_storage_config_to_registry(&config.image_storage))
        .map_err(|e| Error::configuration(format!("ImageStorage: {e}")))
}
