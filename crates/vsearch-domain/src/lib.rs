//! Domain Layer - Visual Search Backend
//!
//! Core types and rules for product visual-similarity search, with no
//! dependency on transports, storage engines or model servers.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | `Product` and its public view |
//! | [`value_objects`] | Embeddings, image references, search results, `TopK` |
//! | [`similarity`] | Dot product, cosine similarity, top-k selection |
//! | [`ports`] | Embedding and image storage provider traits |
//! | [`repositories`] | `ProductRepository` trait |
//! | [`error`] | Error taxonomy shared by every layer |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod repositories;
pub mod similarity;
pub mod value_objects;

pub use entities::{Product, ProductView};
pub use error::{Error, Result};
pub use value_objects::{Embedding, ImageReference, SearchOutcome, SearchResult, TopK};
