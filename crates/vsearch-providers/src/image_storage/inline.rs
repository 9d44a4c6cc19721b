//! Inline image storage
//!
//! The payload stays on the product as `imageBase64`; nothing is written
//! anywhere else.

use async_trait::async_trait;

use vsearch_domain::error::Result;
use vsearch_domain::ports::providers::ImageStorageProvider;
use vsearch_domain::value_objects::ImageReference;

/// Image storage that returns the payload unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineImageStorage;

impl InlineImageStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageStorageProvider for InlineImageStorage {
    async fn store(&self, _product_id: &str, image_base64: &str) -> Result<ImageReference> {
        Ok(ImageReference::Inline(image_base64.to_string()))
    }

    async fn delete(&self, _product_id: &str) -> Result<()> {
        Ok(())
    }

    fn produces_urls(&self) -> bool {
        false
    }

    fn provider_name(&self) -> &str {
        "inline"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use vsearch_application::ports::registry::{
    IMAGE_STORAGE_PROVIDERS, ImageStorageProviderConfig, ImageStorageProviderEntry,
};

fn inline_storage_factory(
    _config: &ImageStorageProviderConfig,
) -> std::result::Result<Arc<dyn ImageStorageProvider>, String> {
    Ok(Arc::new(InlineImageStorage::new()))
}

#[linkme::distributed_slice(IMAGE_STORAGE_PROVIDERS)]
static INLINE_STORAGE: ImageStorageProviderEntry = ImageStorageProviderEntry {
    name: "inline",
    description: "Keep images inline on the product record as base64",
    factory: inline_storage_factory,
};
