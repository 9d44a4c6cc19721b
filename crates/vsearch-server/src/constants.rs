//! Server constants

/// Route prefix of the visual search API
pub const API_PREFIX: &str = "/vs";

/// Error label for request validation failures
pub const ERROR_INVALID_REQUEST: &str = "Invalid request";

/// Error label for missing resources
pub const ERROR_NOT_FOUND: &str = "Not found";

/// Message returned after a successful delete
pub const MESSAGE_PRODUCT_DELETED: &str = "Product deleted successfully";

/// Methods advertised to browsers in CORS responses
pub const CORS_ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Embedding status strings reported by the health endpoint
pub const EMBEDDINGS_CONNECTED: &str = "connected";
pub const EMBEDDINGS_UNAVAILABLE: &str = "unavailable";
