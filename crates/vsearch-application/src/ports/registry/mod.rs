//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for plugin providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = pgvector" → PgVectorRepo     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in vsearch-providers)
//!
//! ```ignore
//! use vsearch_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static CLIP_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "clip",
//!     description: "CLIP embedding server over HTTP",
//!     factory: clip_factory,
//! };
//! ```
//!
//! ### Resolving a Provider (in vsearch-infrastructure)
//!
//! ```ignore
//! use vsearch_application::ports::registry::resolve_product_repository;
//!
//! let config = ProductRepositoryConfig::new("memory").with_dimensions(1024);
//! let repository = resolve_product_repository(&config)?;
//! ```

pub mod embedding;
pub mod image_storage;
pub mod repository;

// Re-export all registry types and functions
pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, list_embedding_providers,
    resolve_embedding_provider,
};
pub use image_storage::{
    IMAGE_STORAGE_PROVIDERS, ImageStorageProviderConfig, ImageStorageProviderEntry,
    list_image_storage_providers, resolve_image_storage_provider,
};
pub use repository::{
    PRODUCT_REPOSITORIES, ProductRepositoryConfig, ProductRepositoryEntry,
    list_product_repositories, resolve_product_repository,
};
