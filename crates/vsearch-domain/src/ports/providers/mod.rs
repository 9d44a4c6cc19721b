//! External Provider Ports
//!
//! Ports for external services the domain depends on.
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Text and image embedding generation |
//! | ImageStorageProvider | Product image persistence |

/// Embedding provider port
pub mod embedding;
/// Image storage provider port
pub mod image_storage;

pub use embedding::EmbeddingProvider;
pub use image_storage::ImageStorageProvider;
