//! Search Service Use Case
//!
//! Orchestrates a single search request: validate, embed the query with the
//! modality-specific call, then rank and bound through the repository.
//! Image and text searches share every step after the embedding call.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};
use vsearch_domain::constants::{SEARCH_DEFAULT_TOP_K, SEARCH_MAX_TOP_K};
use vsearch_domain::error::{Error, Result};
use vsearch_domain::ports::providers::EmbeddingProvider;
use vsearch_domain::repositories::ProductRepository;
use vsearch_domain::value_objects::{Embedding, SearchOutcome, TopK};

use crate::ports::services::SearchServiceInterface;

/// Query modality, used for logging
#[derive(Debug, Clone, Copy)]
enum QueryKind {
    Image,
    Text,
}

/// Search service implementation
pub struct SearchServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    repository: Arc<dyn ProductRepository>,
    default_top_k: usize,
    max_top_k: usize,
}

impl SearchServiceImpl {
    /// Create new search service with injected dependencies
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        repository: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            embedding_provider,
            repository,
            default_top_k: SEARCH_DEFAULT_TOP_K,
            max_top_k: SEARCH_MAX_TOP_K,
        }
    }

    /// Override the result-count default and ceiling
    pub fn with_limits(mut self, default_top_k: usize, max_top_k: usize) -> Self {
        self.default_top_k = default_top_k;
        self.max_top_k = max_top_k;
        self
    }

    async fn embed(&self, kind: QueryKind, input: &str) -> Result<Embedding> {
        match kind {
            QueryKind::Image => self.embedding_provider.embed_image(input).await,
            QueryKind::Text => self.embedding_provider.embed_text(input).await,
        }
    }

    /// Shared path: empty-catalog short circuit, embed, dimension check, rank
    async fn run(&self, kind: QueryKind, input: &str, top_k: Option<i64>) -> Result<SearchOutcome> {
        let top_k = TopK::clamp_within(top_k, self.default_top_k, self.max_top_k);

        if self.repository.count().await? == 0 {
            debug!(?kind, "catalog is empty, skipping embedding");
            return Ok(SearchOutcome::empty_catalog());
        }

        let query = self.embed(kind, input).await?;

        let expected = self.repository.dimensions();
        if query.vector.len() != expected {
            return Err(Error::dimension_mismatch(expected, query.vector.len()));
        }

        let results = self
            .repository
            .find_similar(&query.vector, top_k.get())
            .await?;

        info!(
            ?kind,
            top_k = top_k.get(),
            returned = results.len(),
            "search completed"
        );
        Ok(SearchOutcome::ranked(results))
    }
}

#[async_trait]
impl SearchServiceInterface for SearchServiceImpl {
    async fn search_by_image(
        &self,
        image_base64: &str,
        top_k: Option<i64>,
    ) -> Result<SearchOutcome> {
        if image_base64.is_empty() {
            return Err(Error::invalid_argument("Image is required"));
        }
        self.run(QueryKind::Image, image_base64, top_k).await
    }

    async fn search_by_text(&self, query: &str, top_k: Option<i64>) -> Result<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::invalid_argument("Search query is required"));
        }
        self.run(QueryKind::Text, query, top_k).await
    }
}
