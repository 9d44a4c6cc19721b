//! Filesystem image storage
//!
//! Writes decoded images to `<directory>/products/<id>.<ext>` and records
//! `<public_base_url>/products/<id>.<ext>` on the product. Serving the
//! directory under that URL is left to the deployment.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use vsearch_domain::error::{Error, Result};
use vsearch_domain::ports::providers::ImageStorageProvider;
use vsearch_domain::value_objects::{ImageFormat, ImageReference, image_object_path};

use super::prepare_image;

/// Image storage on the local filesystem
pub struct FilesystemImageStorage {
    directory: PathBuf,
    public_base_url: String,
}

impl FilesystemImageStorage {
    /// Create a storage rooted at `directory`, publishing URLs under `public_base_url`
    pub fn new(directory: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Root directory images are written under
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn public_url(&self, object_path: &str) -> String {
        format!("{}/{object_path}", self.public_base_url)
    }
}

#[async_trait]
impl ImageStorageProvider for FilesystemImageStorage {
    async fn store(&self, product_id: &str, image_base64: &str) -> Result<ImageReference> {
        let image = prepare_image(image_base64)?;
        let object_path = image_object_path(product_id, image.format);
        let target = self.directory.join(&object_path);

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::storage_with_source(
                    format!("Failed to create image directory {}", parent.display()),
                    e,
                )
            })?;
        }
        tokio::fs::write(&target, &image.bytes).await.map_err(|e| {
            Error::storage_with_source(format!("Failed to write image {}", target.display()), e)
        })?;

        debug!(path = %target.display(), bytes = image.bytes.len(), "image stored");
        Ok(ImageReference::Url(self.public_url(&object_path)))
    }

    async fn delete(&self, product_id: &str) -> Result<()> {
        for format in ImageFormat::ALL {
            let target = self.directory.join(image_object_path(product_id, format));
            match tokio::fs::remove_file(&target).await {
                Ok(()) => debug!(path = %target.display(), "image removed"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(Error::storage_with_source(
                        format!("Failed to remove image {}", target.display()),
                        e,
                    ));
                }
            }
        }
        Ok(())
    }

    fn produces_urls(&self) -> bool {
        true
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use vsearch_application::ports::registry::{
    IMAGE_STORAGE_PROVIDERS, ImageStorageProviderConfig, ImageStorageProviderEntry,
};

fn filesystem_storage_factory(
    config: &ImageStorageProviderConfig,
) -> std::result::Result<Arc<dyn ImageStorageProvider>, String> {
    let directory = config
        .directory
        .clone()
        .ok_or_else(|| "filesystem image storage requires a directory".to_string())?;
    let public_base_url = config
        .public_base_url
        .clone()
        .ok_or_else(|| "filesystem image storage requires a public base URL".to_string())?;
    Ok(Arc::new(FilesystemImageStorage::new(
        directory,
        public_base_url,
    )))
}

#[linkme::distributed_slice(IMAGE_STORAGE_PROVIDERS)]
static FILESYSTEM_STORAGE: ImageStorageProviderEntry = ImageStorageProviderEntry {
    name: "filesystem",
    description: "Write images under a local directory served at a public URL",
    factory: filesystem_storage_factory,
};
