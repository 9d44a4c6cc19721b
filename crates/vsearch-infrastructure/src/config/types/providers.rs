//! Provider selection and settings
//!
//! Each section names a provider registered in the corresponding linkme
//! slice plus the settings that provider reads.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vsearch_domain::constants::EMBEDDING_DIMENSIONS_DEFAULT;

use crate::constants::{
    DEFAULT_DATA_FILE, DEFAULT_DB_CONNECTION_TIMEOUT_SECS, DEFAULT_DB_MAX_CONNECTIONS,
    DEFAULT_EMBEDDING_BASE_URL, DEFAULT_EMBEDDING_PROVIDER, DEFAULT_EMBEDDING_TIMEOUT_SECS,
    DEFAULT_HEALTH_CACHE_TTL_SECS, DEFAULT_IMAGE_BUCKET, DEFAULT_IMAGE_STORAGE_PROVIDER,
    DEFAULT_REPOSITORY_PROVIDER,
};

/// Embedding gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider name ("clip", "null")
    pub provider: String,
    /// Model server URL
    pub base_url: Option<String>,
    /// Embedding length shared by the model and the repository
    pub dimensions: usize,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// How long a health probe result is reused
    pub health_cache_ttl_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            base_url: Some(DEFAULT_EMBEDDING_BASE_URL.to_string()),
            dimensions: EMBEDDING_DIMENSIONS_DEFAULT,
            timeout_secs: DEFAULT_EMBEDDING_TIMEOUT_SECS,
            health_cache_ttl_secs: DEFAULT_HEALTH_CACHE_TTL_SECS,
        }
    }
}

/// Product repository configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Strategy name ("memory", "pgvector")
    pub provider: String,
    /// JSON mirror for the memory strategy; `None` keeps the catalog in memory only
    pub data_file: Option<PathBuf>,
    /// Connection string for database strategies
    pub database_url: Option<String>,
    /// Pool size for database strategies
    pub max_connections: u32,
    /// Pool checkout timeout
    pub connection_timeout_secs: u64,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_REPOSITORY_PROVIDER.to_string(),
            data_file: Some(PathBuf::from(DEFAULT_DATA_FILE)),
            database_url: None,
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            connection_timeout_secs: DEFAULT_DB_CONNECTION_TIMEOUT_SECS,
        }
    }
}

/// Product image storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageStorageConfig {
    /// Provider name ("inline", "filesystem", "supabase")
    pub provider: String,
    /// Root directory for the filesystem provider
    pub directory: Option<PathBuf>,
    /// URL prefix under which the filesystem directory is served
    pub public_base_url: Option<String>,
    /// Supabase project URL
    pub supabase_url: Option<String>,
    /// Supabase API key
    pub api_key: Option<String>,
    /// Storage bucket
    pub bucket: String,
}

impl Default for ImageStorageConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_IMAGE_STORAGE_PROVIDER.to_string(),
            directory: None,
            public_base_url: None,
            supabase_url: None,
            api_key: None,
            bucket: DEFAULT_IMAGE_BUCKET.to_string(),
        }
    }
}
