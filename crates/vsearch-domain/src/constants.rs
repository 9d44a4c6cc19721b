//! Domain layer constants
//!
//! Constants that are part of the search and catalog rules. Provider and
//! infrastructure specific values live in their own crates.

// ============================================================================
// SEARCH DOMAIN CONSTANTS
// ============================================================================

/// Number of results returned when a request does not specify `topK`
pub const SEARCH_DEFAULT_TOP_K: usize = 10;

/// Smallest result bound a search may request
pub const SEARCH_MIN_TOP_K: usize = 1;

/// Largest result bound a search may request
pub const SEARCH_MAX_TOP_K: usize = 50;

/// Scores are rounded to this many decimal places
pub const SCORE_DECIMAL_PLACES: i32 = 4;

/// Informational message attached to searches over an empty catalog
pub const EMPTY_CATALOG_MESSAGE: &str = "No products in the database yet";

// ============================================================================
// EMBEDDING DOMAIN CONSTANTS
// ============================================================================

/// Embedding length produced by the jina-clip-v2 model behind the embedding server
pub const EMBEDDING_DIMENSIONS_DEFAULT: usize = 1024;
