//! Provider Constants
//!
//! Constants specific to provider implementations. Domain rules live in
//! `vsearch_domain::constants`.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Default base URL of the CLIP embedding server
pub const CLIP_DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// Default per-request timeout for embedding calls (seconds)
pub const EMBEDDING_TIMEOUT_SECS_DEFAULT: u64 = 30;

/// Model label attached to embeddings from the CLIP server
pub const CLIP_MODEL_NAME: &str = "jina-clip-v2";

/// Model label attached to null-provider embeddings
pub const NULL_MODEL_NAME: &str = "null-test";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Content-Type header value for JSON
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// REPOSITORY CONSTANTS
// ============================================================================

/// Default pool size for the database repository
pub const PGVECTOR_MAX_CONNECTIONS_DEFAULT: u32 = 10;

/// Default pool checkout timeout (seconds)
pub const PGVECTOR_CONNECTION_TIMEOUT_SECS_DEFAULT: u64 = 30;

/// Table holding catalog products
pub const PGVECTOR_TABLE_NAME: &str = "products";

/// pgvector's default HNSW candidate list size (`hnsw.ef_search`)
pub const PGVECTOR_EF_SEARCH_DEFAULT: usize = 40;

/// Largest `hnsw.ef_search` pgvector accepts
pub const PGVECTOR_EF_SEARCH_MAX: usize = 1000;

// ============================================================================
// IMAGE STORAGE CONSTANTS
// ============================================================================

/// Default bucket for remote image storage
pub const STORAGE_DEFAULT_BUCKET: &str = "product-images";
