//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use vsearch_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Prefixed environment variables, `__` between nested keys
    ///    (e.g., `VSEARCH_SERVER__PORT`)
    /// 4. Well-known deployment variables (`PORT`, `DATABASE_URL`,
    ///    `PYTHON_EMBED_URL`, `SUPABASE_URL`, `SUPABASE_API_KEY`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let mut app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        apply_well_known_env(&mut app_config, |name| env::var(name).ok())?;
        fill_derived_defaults(&mut app_config);

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the unprefixed deployment variables on top of a loaded config
///
/// `lookup` resolves a variable name to its value; empty values are
/// treated as unset.
pub fn apply_well_known_env<F>(config: &mut AppConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(port) = get(ENV_PORT) {
        config.server.port = port.trim().parse().map_err(|e| {
            Error::configuration_with_source(format!("Invalid {ENV_PORT} value '{port}'"), e)
        })?;
    }
    if let Some(url) = get(ENV_DATABASE_URL) {
        config.repository.database_url = Some(url);
    }
    if let Some(url) = get(ENV_EMBED_URL) {
        config.embedding.base_url = Some(url);
    }
    if let Some(url) = get(ENV_SUPABASE_URL) {
        config.image_storage.supabase_url = Some(url);
    }
    if let Some(key) = get(ENV_SUPABASE_API_KEY).or_else(|| get(ENV_SUPABASE_SERVICE_KEY)) {
        config.image_storage.api_key = Some(key);
    }
    Ok(())
}

/// Fill settings that can be inferred from other settings
fn fill_derived_defaults(config: &mut AppConfig) {
    if config.image_storage.supabase_url.is_none() {
        config.image_storage.supabase_url = config
            .repository
            .database_url
            .as_deref()
            .and_then(derive_supabase_url);
    }
}

/// Derive a Supabase project URL from a pooled connection string
///
/// Pooler connection strings carry the project ref in the user name
/// (`postgres.<ref>:password@...`); the project URL is
/// `https://<ref>.supabase.co`.
pub fn derive_supabase_url(database_url: &str) -> Option<String> {
    let start = database_url.find("postgres.")? + "postgres.".len();
    let rest = &database_url[start..];
    let project_ref = &rest[..rest.find(':')?];
    if project_ref.is_empty() || project_ref.contains(['/', '@']) {
        return None;
    }
    Some(format!("https://{project_ref}.supabase.co"))
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_embedding_config(config)?;
    validate_repository_config(config)?;
    validate_image_storage_config(config)?;
    validate_search_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    if config.server.json_limit_bytes == 0 {
        return Err(Error::configuration("JSON body limit cannot be 0"));
    }
    Ok(())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    if config.embedding.dimensions == 0 {
        return Err(Error::configuration("Embedding dimensions cannot be 0"));
    }
    if config.embedding.timeout_secs == 0 {
        return Err(Error::configuration("Embedding timeout cannot be 0"));
    }
    Ok(())
}

fn validate_repository_config(config: &AppConfig) -> Result<()> {
    let repository = &config.repository;
    if repository.provider == "pgvector" {
        if repository.database_url.is_none() {
            return Err(Error::configuration(
                "A database URL is required for the pgvector repository",
            ));
        }
        if config.image_storage.provider == DEFAULT_IMAGE_STORAGE_PROVIDER {
            return Err(Error::configuration(
                "The pgvector repository stores image URLs; configure the filesystem or supabase image storage",
            ));
        }
        if repository.max_connections == 0 {
            return Err(Error::configuration("Database pool size cannot be 0"));
        }
    }
    Ok(())
}

fn validate_image_storage_config(config: &AppConfig) -> Result<()> {
    let storage = &config.image_storage;
    match storage.provider.as_str() {
        "filesystem" if storage.directory.is_none() || storage.public_base_url.is_none() => {
            Err(Error::configuration(
                "Filesystem image storage requires a directory and a public base URL",
            ))
        }
        "supabase" if storage.supabase_url.is_none() || storage.api_key.is_none() => {
            Err(Error::configuration(
                "Supabase image storage requires a project URL and an API key",
            ))
        }
        _ => Ok(()),
    }
}

fn validate_search_config(config: &AppConfig) -> Result<()> {
    let search = &config.search;
    if search.default_top_k == 0 {
        return Err(Error::configuration("Default topK cannot be 0"));
    }
    if search.default_top_k > search.max_top_k {
        return Err(Error::configuration(format!(
            "Default topK ({}) cannot exceed maximum topK ({})",
            search.default_top_k, search.max_top_k
        )));
    }
    Ok(())
}
