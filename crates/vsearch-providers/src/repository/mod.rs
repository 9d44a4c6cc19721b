//! Product repository implementations
//!
//! | Repository | Description |
//! |------------|-------------|
//! | `memory` | Linear scan over an in-memory catalog, optional JSON file mirror |
//! | `pgvector` | PostgreSQL with an HNSW cosine index |

pub mod in_memory;
#[cfg(feature = "repository-pgvector")]
pub mod pgvector;

pub use in_memory::InMemoryProductRepository;
#[cfg(feature = "repository-pgvector")]
pub use pgvector::PgVectorProductRepository;
