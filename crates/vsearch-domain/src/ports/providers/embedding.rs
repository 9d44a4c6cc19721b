use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::Embedding;

/// Joint Text/Image Embedding Interface
///
/// Defines the contract for services that map both text and images into a
/// shared vector space. The production implementation calls a CLIP-style
/// model server over HTTP; the null implementation is deterministic and
/// offline.
///
/// # Example
///
/// ```ignore
/// use vsearch_domain::ports::providers::EmbeddingProvider;
///
/// let query = provider.embed_text("red running shoes").await?;
/// assert_eq!(query.dimensions, provider.dimensions());
///
/// let image = provider.embed_image("data:image/png;base64,iVBORw0...").await?;
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a text query
    ///
    /// Fails with an `Embedding` error on transport failure, timeout or a
    /// non-success upstream response.
    async fn embed_text(&self, text: &str) -> Result<Embedding>;

    /// Embed an image given as base64 (a data URI prefix is accepted)
    ///
    /// Same failure contract as [`EmbeddingProvider::embed_text`].
    async fn embed_image(&self, image_base64: &str) -> Result<Embedding>;

    /// Length of the vectors this provider produces
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "clip", "null")
    fn provider_name(&self) -> &str;

    /// Probe the upstream model
    ///
    /// Never errors: any failure, or a model that is not loaded, is `false`.
    async fn check_health(&self) -> bool;
}
