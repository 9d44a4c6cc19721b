//! HTTP server configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_JSON_LIMIT_BYTES, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Maximum JSON request body, in bytes
    pub json_limit_bytes: u64,
    /// Add permissive CORS headers for browser clients
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            json_limit_bytes: DEFAULT_JSON_LIMIT_BYTES,
            cors: true,
        }
    }
}
