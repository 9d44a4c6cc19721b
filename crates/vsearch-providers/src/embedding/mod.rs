//! Embedding provider implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | `clip` | HTTP client for the CLIP embedding server |
//! | `null` | Deterministic offline embeddings for tests and development |

#[cfg(feature = "embedding-clip")]
pub mod clip;
pub mod null;

#[cfg(feature = "embedding-clip")]
pub use clip::ClipEmbeddingProvider;
pub use null::NullEmbeddingProvider;
