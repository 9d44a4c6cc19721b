//! Domain Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

/// Embedding vectors
pub mod embedding;
/// Product image references
pub mod image;
/// Search results and bounds
pub mod search;

pub use embedding::Embedding;
pub use image::{ImageFormat, ImageReference, image_object_path, strip_data_uri};
pub use search::{SearchOutcome, SearchResult, TopK};
