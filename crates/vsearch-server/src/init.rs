//! Server Initialization
//!
//! Loads configuration, installs logging, builds the application context
//! and runs a command against it.

use std::path::Path;

use tracing::info;
use vsearch_domain::error::Result;
use vsearch_infrastructure::config::{AppConfig, ConfigLoader};
use vsearch_infrastructure::di::init_app;
use vsearch_infrastructure::logging::init_logging;

use crate::transport::HttpServer;

/// Load configuration from an optional explicit path
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Run the HTTP server
pub async fn run_server(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    init_logging(config.logging.clone())?;

    info!(
        embedding = %config.embedding.provider,
        repository = %config.repository.provider,
        image_storage = %config.image_storage.provider,
        "Starting visual search server"
    );

    let context = init_app(config).await?;
    HttpServer::new(context).start().await
}

/// Delete every product in the configured catalog, returning how many were removed
pub async fn clear_catalog(config_path: Option<&Path>) -> Result<usize> {
    let config = load_config(config_path)?;
    init_logging(config.logging.clone())?;

    let context = init_app(config).await?;
    let removed = context.catalog().clear_catalog().await?;
    info!(removed, "catalog cleared");
    Ok(removed)
}
