//! Product image references and payload helpers

use serde::{Deserialize, Serialize};

/// Where a product's image bytes live
///
/// Exactly one representation exists per product. When embedded in a
/// [`Product`](crate::entities::Product) the variant becomes a top-level
/// `imageBase64` or `imageUrl` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImageReference {
    /// Image kept inline as a base64 payload (optionally a data URI)
    #[serde(rename = "imageBase64")]
    Inline(String),
    /// Image stored elsewhere and reachable at this URL
    #[serde(rename = "imageUrl")]
    Url(String),
}

impl ImageReference {
    /// The URL, when the image lives in external storage
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Inline(_) => None,
        }
    }
}

/// Image formats recognised from a data URI prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
    Gif,
}

impl ImageFormat {
    /// Every format, in the order storage backends probe them on delete
    pub const ALL: [ImageFormat; 4] = [Self::Jpeg, Self::Png, Self::Webp, Self::Gif];

    /// Detect the format from a payload, defaulting to JPEG
    pub fn detect(payload: &str) -> Self {
        if payload.starts_with("data:image/png") {
            Self::Png
        } else if payload.starts_with("data:image/webp") {
            Self::Webp
        } else if payload.starts_with("data:image/gif") {
            Self::Gif
        } else {
            Self::Jpeg
        }
    }

    /// File extension used for stored objects
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Gif => "gif",
        }
    }

    /// MIME type sent with uploads
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
        }
    }
}

/// Strip a `data:image/<type>;base64,` prefix, returning the bare base64 body
pub fn strip_data_uri(payload: &str) -> &str {
    let Some(rest) = payload.strip_prefix("data:image/") else {
        return payload;
    };
    match rest.split_once(";base64,") {
        Some((kind, body))
            if !kind.is_empty() && kind.chars().all(|c| c.is_alphanumeric() || c == '_') =>
        {
            body
        }
        _ => payload,
    }
}

/// Object key used for a product's image: `products/<id>.<ext>`
pub fn image_object_path(product_id: &str, format: ImageFormat) -> String {
    format!("products/{product_id}.{}", format.extension())
}
