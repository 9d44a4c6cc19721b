//! Supabase Storage image provider
//!
//! Uploads product images to a Supabase Storage bucket over its REST API
//! and records the public object URL:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | upload | `POST {url}/storage/v1/object/{bucket}/products/<id>.<ext>` (`x-upsert: true`) |
//! | public URL | `{url}/storage/v1/object/public/{bucket}/products/<id>.<ext>` |
//! | delete | `DELETE {url}/storage/v1/object/{bucket}` with `{"prefixes": [...]}` |

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use vsearch_domain::error::{Error, Result};
use vsearch_domain::ports::providers::ImageStorageProvider;
use vsearch_domain::value_objects::{ImageFormat, ImageReference, image_object_path};

use super::prepare_image;
use crate::utils::HttpResponseUtils;

/// Supabase Storage image provider
pub struct SupabaseImageStorage {
    base_url: String,
    api_key: String,
    bucket: String,
    http_client: Client,
}

impl SupabaseImageStorage {
    /// Create a new provider
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://abc.supabase.co")
    /// * `api_key` - Service key sent as bearer token and `apikey`
    /// * `bucket` - Storage bucket name
    /// * `http_client` - Reqwest HTTP client
    pub fn new(base_url: String, api_key: String, bucket: String, http_client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            bucket,
            http_client,
        }
    }

    fn object_url(&self, object_path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{object_path}",
            self.base_url, self.bucket
        )
    }

    /// Publicly readable URL of a stored object
    pub fn public_url(&self, object_path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{object_path}",
            self.base_url, self.bucket
        )
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
    }
}

#[async_trait]
impl ImageStorageProvider for SupabaseImageStorage {
    async fn store(&self, product_id: &str, image_base64: &str) -> Result<ImageReference> {
        let image = prepare_image(image_base64)?;
        let object_path = image_object_path(product_id, image.format);

        let response = self
            .authorized(self.http_client.post(self.object_url(&object_path)))
            .header("Content-Type", image.format.content_type())
            .header("x-upsert", "true")
            .body(image.bytes)
            .send()
            .await
            .map_err(|e| Error::storage_with_source("Image upload failed", e))?;
        HttpResponseUtils::ensure_storage_success(response, "Supabase").await?;

        debug!(path = %object_path, bucket = %self.bucket, "image uploaded");
        Ok(ImageReference::Url(self.public_url(&object_path)))
    }

    async fn delete(&self, product_id: &str) -> Result<()> {
        let prefixes: Vec<String> = ImageFormat::ALL
            .iter()
            .map(|format| image_object_path(product_id, *format))
            .collect();

        let response = self
            .authorized(self.http_client.delete(format!(
                "{}/storage/v1/object/{}",
                self.base_url, self.bucket
            )))
            .json(&serde_json::json!({ "prefixes": prefixes }))
            .send()
            .await
            .map_err(|e| Error::storage_with_source("Image delete failed", e))?;
        HttpResponseUtils::ensure_storage_success(response, "Supabase").await
    }

    fn produces_urls(&self) -> bool {
        true
    }

    fn provider_name(&self) -> &str {
        "supabase"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use vsearch_application::ports::registry::{
    IMAGE_STORAGE_PROVIDERS, ImageStorageProviderConfig, ImageStorageProviderEntry,
};

use crate::constants::STORAGE_DEFAULT_BUCKET;

fn supabase_storage_factory(
    config: &ImageStorageProviderConfig,
) -> std::result::Result<Arc<dyn ImageStorageProvider>, String> {
    let base_url = config
        .url
        .clone()
        .ok_or_else(|| "supabase image storage requires a URL".to_string())?;
    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| "supabase image storage requires an API key".to_string())?;
    let bucket = config
        .bucket
        .clone()
        .unwrap_or_else(|| STORAGE_DEFAULT_BUCKET.to_string());
    let http_client = Client::builder()
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    Ok(Arc::new(SupabaseImageStorage::new(
        base_url,
        api_key,
        bucket,
        http_client,
    )))
}

#[linkme::distributed_slice(IMAGE_STORAGE_PROVIDERS)]
static SUPABASE_STORAGE: ImageStorageProviderEntry = ImageStorageProviderEntry {
    name: "supabase",
    description: "Upload images to a Supabase Storage bucket",
    factory: supabase_storage_factory,
};
