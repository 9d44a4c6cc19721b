use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::ImageReference;

/// Product Image Storage Interface
///
/// Persists the binary image of a product and hands back the reference that
/// is recorded on the product. Callers treat `delete` as best-effort.
#[async_trait]
pub trait ImageStorageProvider: Send + Sync {
    /// Store the image for `product_id`
    ///
    /// `image_base64` may carry a `data:image/<type>;base64,` prefix, which
    /// also selects the stored format.
    async fn store(&self, product_id: &str, image_base64: &str) -> Result<ImageReference>;

    /// Remove any stored image for `product_id`; absent images are not an error
    async fn delete(&self, product_id: &str) -> Result<()>;

    /// Whether stored references are URLs rather than inline payloads
    fn produces_urls(&self) -> bool;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
