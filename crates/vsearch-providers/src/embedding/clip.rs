//! CLIP Embedding Provider
//!
//! Implements the EmbeddingProvider port against a CLIP-style model server
//! that embeds text and images into one vector space:
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | POST | `/embed/text` | `{"text"}` | `{"embedding", "dimensions"}` |
//! | POST | `/embed/image` | `{"imageBase64"}` | `{"embedding", "dimensions"}` |
//! | GET | `/health` | | `{"model_loaded"}` |

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use vsearch_domain::error::{Error, Result};
use vsearch_domain::ports::providers::EmbeddingProvider;
use vsearch_domain::value_objects::Embedding;

use crate::constants::{CLIP_MODEL_NAME, CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT};
use crate::utils::HttpResponseUtils;

/// Body returned by both embed endpoints
#[derive(Debug, Deserialize)]
struct ClipEmbeddingResponse {
    embedding: Vec<f32>,
    dimensions: usize,
}

/// Body returned by the health endpoint
#[derive(Debug, Deserialize)]
struct ClipHealthResponse {
    #[serde(default)]
    model_loaded: bool,
}

/// CLIP embedding provider
///
/// Receives its HTTP client via constructor injection; every request is
/// bounded by `timeout`.
///
/// ## Example
///
/// ```rust,no_run
/// use vsearch_providers::embedding::ClipEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = ClipEmbeddingProvider::new(
///         "http://localhost:8001".to_string(),
///         1024,
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct ClipEmbeddingProvider {
    base_url: String,
    dimensions: usize,
    timeout: Duration,
    http_client: Client,
}

impl ClipEmbeddingProvider {
    /// Create a new CLIP embedding provider
    ///
    /// # Arguments
    /// * `base_url` - Embedding server URL (e.g., "http://localhost:8001")
    /// * `dimensions` - Expected embedding length
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(base_url: String, dimensions: usize, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            dimensions,
            timeout,
            http_client,
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn transport_error(&self, e: &reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::embedding(format!("{ERROR_MSG_REQUEST_TIMEOUT} {:?}", self.timeout))
        } else {
            Error::embedding(format!("HTTP request failed: {e}"))
        }
    }

    /// POST a payload to an embed endpoint and parse the vector
    async fn fetch_embedding(&self, path: &str, payload: serde_json::Value) -> Result<Embedding> {
        let response = self
            .http_client
            .post(self.endpoint(path))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let response_data = HttpResponseUtils::check_and_parse(response, "CLIP").await?;
        Self::parse_embedding(response_data)
    }

    /// Parse embedding from response data
    fn parse_embedding(response_data: serde_json::Value) -> Result<Embedding> {
        let parsed: ClipEmbeddingResponse = serde_json::from_value(response_data)
            .map_err(|e| Error::embedding(format!("Invalid response format: {e}")))?;

        if parsed.embedding.len() != parsed.dimensions {
            return Err(Error::embedding(format!(
                "Invalid response: reported {} dimensions but returned {} values",
                parsed.dimensions,
                parsed.embedding.len()
            )));
        }

        Ok(Embedding::new(parsed.embedding, CLIP_MODEL_NAME))
    }
}

#[async_trait]
impl EmbeddingProvider for ClipEmbeddingProvider {
    async fn embed_text(&self, text: &str) -> Result<Embedding> {
        let embedding = self
            .fetch_embedding("/embed/text", serde_json::json!({ "text": text }))
            .await?;
        debug!(dimensions = embedding.dimensions, "text embedded");
        Ok(embedding)
    }

    async fn embed_image(&self, image_base64: &str) -> Result<Embedding> {
        let embedding = self
            .fetch_embedding(
                "/embed/image",
                serde_json::json!({ "imageBase64": image_base64 }),
            )
            .await?;
        debug!(dimensions = embedding.dimensions, "image embedded");
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "clip"
    }

    async fn check_health(&self) -> bool {
        let response = match self
            .http_client
            .get(self.endpoint("/health"))
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                debug!(status = response.status().as_u16(), "health probe rejected");
                return false;
            }
            Err(e) => {
                debug!(error = %e, "health probe failed");
                return false;
            }
        };

        response
            .json::<ClipHealthResponse>()
            .await
            .is_ok_and(|health| health.model_loaded)
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use vsearch_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use vsearch_domain::constants::EMBEDDING_DIMENSIONS_DEFAULT;
use vsearch_domain::ports::providers::EmbeddingProvider as EmbeddingProviderPort;

use crate::constants::{CLIP_DEFAULT_BASE_URL, EMBEDDING_TIMEOUT_SECS_DEFAULT};

/// Factory function for creating CLIP embedding provider instances.
fn clip_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProviderPort>, String> {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| CLIP_DEFAULT_BASE_URL.to_string());
    let dimensions = config.dimensions.unwrap_or(EMBEDDING_DIMENSIONS_DEFAULT);
    let timeout = config
        .timeout
        .unwrap_or(Duration::from_secs(EMBEDDING_TIMEOUT_SECS_DEFAULT));
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    Ok(Arc::new(ClipEmbeddingProvider::new(
        base_url,
        dimensions,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static CLIP_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "clip",
    description: "CLIP embedding server over HTTP (jina-clip-v2, text and image)",
    factory: clip_factory,
};
