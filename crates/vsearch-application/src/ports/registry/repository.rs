//! Product Repository Registry
//!
//! Auto-registration for the repository strategies (linear scan, indexed
//! database). The strategy is selected once at startup by name.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use vsearch_domain::repositories::ProductRepository;

/// Configuration for product repository creation
#[derive(Debug, Clone, Default)]
pub struct ProductRepositoryConfig {
    /// Strategy name (e.g., "memory", "pgvector")
    pub provider: String,
    /// Embedding dimensions every product must have
    pub dimensions: Option<usize>,
    /// JSON file mirroring the in-memory catalog
    pub data_file: Option<PathBuf>,
    /// Database connection string
    pub database_url: Option<String>,
    /// Maximum pooled connections
    pub max_connections: Option<u32>,
    /// Time to wait for a pooled connection
    pub connection_timeout: Option<Duration>,
}

impl ProductRepositoryConfig {
    /// Create a new config with the given strategy name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the dimensions
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the data file mirror
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    /// Set the database URL
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the pool size
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = Some(max_connections);
        self
    }

    /// Set the pool checkout timeout
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = Some(timeout);
        self
    }
}

/// Registry entry for product repositories
pub struct ProductRepositoryEntry {
    /// Unique strategy name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function; may block (database strategies connect eagerly)
    pub factory: fn(&ProductRepositoryConfig) -> Result<Arc<dyn ProductRepository>, String>,
}

#[linkme::distributed_slice]
pub static PRODUCT_REPOSITORIES: [ProductRepositoryEntry] = [..];

/// Resolve product repository by name from registry
pub fn resolve_product_repository(
    config: &ProductRepositoryConfig,
) -> Result<Arc<dyn ProductRepository>, String> {
    let provider_name = &config.provider;

    for entry in PRODUCT_REPOSITORIES {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = PRODUCT_REPOSITORIES.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown product repository '{provider_name}'. Available repositories: {available:?}"
    ))
}

/// List all registered product repositories
pub fn list_product_repositories() -> Vec<(&'static str, &'static str)> {
    PRODUCT_REPOSITORIES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
