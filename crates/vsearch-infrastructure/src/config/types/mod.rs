//! Configuration types module

pub mod app;
pub mod logging;
pub mod providers;
pub mod server;

// Re-export main types
pub use app::*;
pub use logging::LoggingConfig;
pub use providers::{EmbeddingConfig, ImageStorageConfig, RepositoryConfig};
pub use server::ServerConfig;
