//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and external layers. High-level
//! code (the application services) depends on these traits; the providers
//! crate implements them.

/// External service provider ports
pub mod providers;

pub use providers::{EmbeddingProvider, ImageStorageProvider};
