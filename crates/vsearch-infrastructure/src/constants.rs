//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `vsearch_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "vsearch.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "vsearch";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "VSEARCH";

/// Separator between nested keys in prefixed environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Well-known variable: database connection string
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Well-known variable: embedding server URL
pub const ENV_EMBED_URL: &str = "PYTHON_EMBED_URL";

/// Well-known variable: Supabase project URL
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";

/// Well-known variable: Supabase API key
pub const ENV_SUPABASE_API_KEY: &str = "SUPABASE_API_KEY";

/// Well-known variable: Supabase service key (fallback for the API key)
pub const ENV_SUPABASE_SERVICE_KEY: &str = "SUPABASE_SERVICE_KEY";

/// Well-known variable: HTTP listen port
pub const ENV_PORT: &str = "PORT";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default JSON body limit (10 MiB, room for base64 images)
pub const DEFAULT_JSON_LIMIT_BYTES: u64 = 10 * 1024 * 1024;

// ============================================================================
// PROVIDER DEFAULTS
// ============================================================================

/// Default embedding provider
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "clip";

/// Default embedding server URL
pub const DEFAULT_EMBEDDING_BASE_URL: &str = "http://localhost:8001";

/// Default embedding request timeout (seconds)
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

/// Default embedding health cache TTL (seconds)
pub const DEFAULT_HEALTH_CACHE_TTL_SECS: u64 = 300;

/// Default product repository
pub const DEFAULT_REPOSITORY_PROVIDER: &str = "memory";

/// Default catalog mirror file
pub const DEFAULT_DATA_FILE: &str = "data/products.json";

/// Default pool size for database repositories
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Default pool checkout timeout (seconds)
pub const DEFAULT_DB_CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Default image storage provider
pub const DEFAULT_IMAGE_STORAGE_PROVIDER: &str = "inline";

/// Default image bucket for remote storage
pub const DEFAULT_IMAGE_BUCKET: &str = "product-images";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "VSEARCH_LOG";
