//! Health Service Use Case
//!
//! Reports embedding-model availability and catalog size. Upstream probes
//! are cached for a TTL; failed probes are cached too, so an unavailable
//! model is not hammered by health checks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use vsearch_domain::error::Result;
use vsearch_domain::ports::providers::EmbeddingProvider;
use vsearch_domain::repositories::ProductRepository;

use crate::ports::services::{HealthReport, HealthServiceInterface};

/// Cached result of the last embedding health probe
///
/// Lookups are a pure function of the supplied `now`, which keeps expiry
/// testable without sleeping.
#[derive(Debug, Clone)]
pub struct EmbeddingHealthCache {
    ttl: Duration,
    entry: Option<(bool, Instant)>,
}

impl EmbeddingHealthCache {
    /// Empty cache with the given time-to-live
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// The cached status, if one was recorded less than `ttl` before `now`
    pub fn lookup(&self, now: Instant) -> Option<bool> {
        let (healthy, checked_at) = self.entry?;
        (now.saturating_duration_since(checked_at) < self.ttl).then_some(healthy)
    }

    /// Record a fresh probe result
    pub fn record(&mut self, healthy: bool, now: Instant) {
        self.entry = Some((healthy, now));
    }

    /// Time-to-live of a recorded status
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Health service implementation
pub struct HealthServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    repository: Arc<dyn ProductRepository>,
    cache: Mutex<EmbeddingHealthCache>,
}

impl HealthServiceImpl {
    /// Create new health service with injected dependencies
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        repository: Arc<dyn ProductRepository>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            embedding_provider,
            repository,
            cache: Mutex::new(EmbeddingHealthCache::new(cache_ttl)),
        }
    }

    /// Cached embedding availability, probing upstream once the entry expires
    pub async fn embeddings_available(&self) -> bool {
        // Held across the probe so concurrent checks share one upstream call
        let mut cache = self.cache.lock().await;
        if let Some(healthy) = cache.lookup(Instant::now()) {
            return healthy;
        }

        let healthy = self.embedding_provider.check_health().await;
        if !healthy {
            warn!(
                provider = self.embedding_provider.provider_name(),
                "embedding service unavailable"
            );
        }
        debug!(healthy, "embedding health probed");
        cache.record(healthy, Instant::now());
        healthy
    }
}

#[async_trait]
impl HealthServiceInterface for HealthServiceImpl {
    async fn check(&self) -> Result<HealthReport> {
        let embeddings_available = self.embeddings_available().await;
        let product_count = self.repository.count().await?;
        Ok(HealthReport {
            embeddings_available,
            product_count,
        })
    }
}
