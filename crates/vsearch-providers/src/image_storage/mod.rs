//! Image storage provider implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | `inline` | Keeps the base64 payload on the product record |
//! | `filesystem` | Writes image files under a local directory |
//! | `supabase` | Uploads to a Supabase Storage bucket |

pub mod inline;
#[cfg(feature = "storage-filesystem")]
pub mod filesystem;
#[cfg(feature = "storage-supabase")]
pub mod supabase;

#[cfg(feature = "storage-filesystem")]
pub use filesystem::FilesystemImageStorage;
pub use inline::InlineImageStorage;
#[cfg(feature = "storage-supabase")]
pub use supabase::SupabaseImageStorage;

#[cfg(any(feature = "storage-filesystem", feature = "storage-supabase"))]
use vsearch_domain::error::{Error, Result};
#[cfg(any(feature = "storage-filesystem", feature = "storage-supabase"))]
use vsearch_domain::value_objects::ImageFormat;

/// Image bytes ready to be written, with the format detected from the payload
#[cfg(any(feature = "storage-filesystem", feature = "storage-supabase"))]
pub(crate) struct PreparedImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

/// Detect the format and decode the base64 body of an upload
#[cfg(any(feature = "storage-filesystem", feature = "storage-supabase"))]
pub(crate) fn prepare_image(image_base64: &str) -> Result<PreparedImage> {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    let format = ImageFormat::detect(image_base64);
    let body = vsearch_domain::value_objects::strip_data_uri(image_base64);
    let bytes = STANDARD
        .decode(body.trim())
        .map_err(|e| Error::invalid_argument(format!("Image is not valid base64: {e}")))?;
    Ok(PreparedImage { format, bytes })
}
