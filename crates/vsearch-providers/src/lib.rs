//! # Visual Search - Provider Implementations
//!
//! User-selectable implementations of the ports defined in
//! `vsearch-domain`. Each one registers itself in a `linkme` distributed
//! slice from `vsearch-application`, so linking this crate is enough to make
//! it resolvable by name from configuration.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | CLIP (HTTP), Null |
//! | Repository | `ProductRepository` | InMemory (linear scan), PgVector (indexed) |
//! | Image Storage | `ImageStorageProvider` | Inline, Filesystem, Supabase |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! vsearch-providers = { version = "0.1", default-features = false, features = ["embedding-clip"] }
//! ```
//!
//! The null embedding provider, the in-memory repository and inline image
//! storage are always available.

// Re-export vsearch-domain types commonly used with providers
pub use vsearch_domain::error::{Error, Result};
pub use vsearch_domain::ports::providers::{EmbeddingProvider, ImageStorageProvider};
pub use vsearch_domain::repositories::ProductRepository;

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` for the CLIP model server and offline use.
pub mod embedding;

/// Product repository implementations
///
/// Implements `ProductRepository` as a linear scan and on pgvector.
pub mod repository;

/// Image storage provider implementations
pub mod image_storage;
