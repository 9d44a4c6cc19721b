//! Main application configuration

use serde::{Deserialize, Serialize};
use vsearch_domain::constants::{SEARCH_DEFAULT_TOP_K, SEARCH_MAX_TOP_K};

use super::logging::LoggingConfig;
use super::providers::{EmbeddingConfig, ImageStorageConfig, RepositoryConfig};
use super::server::ServerConfig;

/// Search bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Result count when a request omits `topK`
    pub default_top_k: usize,
    /// Upper bound on `topK`
    pub max_top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_top_k: SEARCH_DEFAULT_TOP_K,
            max_top_k: SEARCH_MAX_TOP_K,
        }
    }
}

/// Application configuration
///
/// Loaded once at startup by [`ConfigLoader`](crate::config::ConfigLoader)
/// and shared read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Embedding gateway
    pub embedding: EmbeddingConfig,
    /// Product repository strategy
    pub repository: RepositoryConfig,
    /// Product image storage
    pub image_storage: ImageStorageConfig,
    /// Search bounds
    pub search: SearchConfig,
    /// Logging
    pub logging: LoggingConfig,
}
