//! Repository Interfaces
//!
//! Repositories abstract the storage and retrieval of domain entities,
//! providing a consistent interface regardless of the underlying storage technology.
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`ProductRepository`] | Product persistence and similarity ranking |

/// Product repository interface
pub mod product_repository;

pub use product_repository::ProductRepository;
