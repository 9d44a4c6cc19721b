//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use async_trait::async_trait;

use vsearch_domain::error::Result;
use vsearch_domain::ports::providers::EmbeddingProvider;
use vsearch_domain::value_objects::Embedding;

use crate::constants::NULL_MODEL_NAME;

/// Null embedding provider for testing
///
/// Returns vectors derived from a hash of the input, so identical inputs
/// always map to identical vectors (similarity 1.0) and distinct inputs
/// almost never do. Text and image inputs share one mapping.
///
/// # Example
///
/// ```rust
/// use vsearch_providers::embedding::NullEmbeddingProvider;
/// use vsearch_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new(8);
/// assert_eq!(provider.dimensions(), 8);
/// assert_eq!(provider.provider_name(), "null");
/// ```
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider producing `dimensions` values
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Deterministic vector for `input`
    pub fn vector_for(&self, input: &str) -> Vec<f32> {
        let mut state = fnv1a(input.as_bytes());
        (0..self.dimensions)
            .map(|_| {
                state = splitmix64(state);
                // Top 24 bits mapped to [-1, 1)
                let unit = (state >> 40) as f32 / (1u64 << 24) as f32;
                unit * 2.0 - 1.0
            })
            .collect()
    }
}

/// FNV-1a 64-bit hash
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

/// One step of the SplitMix64 generator
fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_text(&self, text: &str) -> Result<Embedding> {
        Ok(Embedding::new(self.vector_for(text), NULL_MODEL_NAME))
    }

    async fn embed_image(&self, image_base64: &str) -> Result<Embedding> {
        Ok(Embedding::new(self.vector_for(image_base64), NULL_MODEL_NAME))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }

    async fn check_health(&self) -> bool {
        true
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use vsearch_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use vsearch_domain::constants::EMBEDDING_DIMENSIONS_DEFAULT;

/// Factory function for creating null embedding provider instances.
fn null_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    Ok(Arc::new(NullEmbeddingProvider::new(
        config.dimensions.unwrap_or(EMBEDDING_DIMENSIONS_DEFAULT),
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: null_factory,
};
