//! Image Storage Provider Registry

use std::path::PathBuf;
use std::sync::Arc;

use vsearch_domain::ports::providers::ImageStorageProvider;

/// Configuration for image storage provider creation
#[derive(Debug, Clone, Default)]
pub struct ImageStorageProviderConfig {
    /// Provider name (e.g., "inline", "filesystem", "supabase")
    pub provider: String,
    /// Local directory for the filesystem provider
    pub directory: Option<PathBuf>,
    /// Base URL under which stored files are served
    pub public_base_url: Option<String>,
    /// Remote storage endpoint
    pub url: Option<String>,
    /// API key for the remote storage endpoint
    pub api_key: Option<String>,
    /// Bucket name
    pub bucket: Option<String>,
}

impl ImageStorageProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the local directory
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Set the public base URL
    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = Some(url.into());
        self
    }

    /// Set the remote storage URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the bucket
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }
}

/// Registry entry for image storage providers
pub struct ImageStorageProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&ImageStorageProviderConfig) -> Result<Arc<dyn ImageStorageProvider>, String>,
}

#[linkme::distributed_slice]
pub static IMAGE_STORAGE_PROVIDERS: [ImageStorageProviderEntry] = [..];

/// Resolve image storage provider by name from registry
pub fn resolve_image_storage_provider(
    config: &ImageStorageProviderConfig,
) -> Result<Arc<dyn ImageStorageProvider>, String> {
    let provider_name = &config.provider;

    for entry in IMAGE_STORAGE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = IMAGE_STORAGE_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown image storage provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered image storage providers
pub fn list_image_storage_providers() -> Vec<(&'static str, &'static str)> {
    IMAGE_STORAGE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
