//! Use Cases - application service implementations

pub mod catalog_service;
pub mod health_service;
pub mod search_service;

pub use catalog_service::CatalogServiceImpl;
pub use health_service::{EmbeddingHealthCache, HealthServiceImpl};
pub use search_service::SearchServiceImpl;
