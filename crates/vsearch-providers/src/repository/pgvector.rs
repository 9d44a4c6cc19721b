//! PostgreSQL + pgvector product repository
//!
//! Stores products in a table with a `vector(D)` column and an HNSW index
//! using cosine distance, and ranks with a single
//! `ORDER BY embedding <=> $1 LIMIT $2` query. Score is `1 - distance`.
//!
//! The `postgres` client is synchronous, so every call is made from
//! `tokio::task::spawn_blocking` using a pooled connection. Construction
//! blocks (it connects and prepares the schema) and must happen outside
//! the async runtime's worker threads.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pgvector::Vector;
use postgres::error::SqlState;
use postgres::{NoTls, Row};
use r2d2::{Pool, PooledConnection};
use r2d2_postgres::PostgresConnectionManager;
use tracing::{debug, info};
use uuid::Uuid;
use vsearch_domain::entities::{Product, ProductView};
use vsearch_domain::error::{Error, Result};
use vsearch_domain::repositories::ProductRepository;
use vsearch_domain::similarity::round_score;
use vsearch_domain::value_objects::{ImageReference, SearchResult};

use crate::constants::{
    PGVECTOR_CONNECTION_TIMEOUT_SECS_DEFAULT, PGVECTOR_EF_SEARCH_DEFAULT, PGVECTOR_EF_SEARCH_MAX,
    PGVECTOR_MAX_CONNECTIONS_DEFAULT, PGVECTOR_TABLE_NAME,
};

type PgPool = Pool<PostgresConnectionManager<NoTls>>;
type PgConnection = PooledConnection<PostgresConnectionManager<NoTls>>;

/// Convert a cosine distance to a client-facing similarity score
///
/// pgvector yields NaN for zero-magnitude vectors; that maps to 0.
pub fn distance_to_score(distance: f64) -> f64 {
    if distance.is_nan() {
        0.0
    } else {
        round_score(1.0 - distance)
    }
}

/// HNSW candidate list size needed to return `top_k` rows from an index scan
pub fn ef_search_for(top_k: usize) -> usize {
    top_k.clamp(PGVECTOR_EF_SEARCH_DEFAULT, PGVECTOR_EF_SEARCH_MAX)
}

/// Ranking query; a NaN distance (zero-magnitude vector) ranks as distance 1,
/// the same place a zero similarity takes in the linear scan
fn similarity_query() -> String {
    format!(
        "SELECT id, name, image_url, created_at,
                COALESCE(NULLIF(embedding <=> $1, 'NaN'), 1) AS distance
         FROM {PGVECTOR_TABLE_NAME}
         ORDER BY distance, created_at, id
         LIMIT $2"
    )
}

/// Product repository backed by PostgreSQL with the pgvector extension
pub struct PgVectorProductRepository {
    // Option so Drop can move the pool off the async runtime
    pool: Option<PgPool>,
    dimensions: usize,
}

impl PgVectorProductRepository {
    /// Connect, create the extension, table and index if missing, and
    /// verify the stored vector dimension matches `dimensions`
    ///
    /// Blocking; call from a plain thread or `spawn_blocking`.
    pub fn connect(
        database_url: &str,
        dimensions: usize,
        max_connections: u32,
        connection_timeout: Duration,
    ) -> Result<Self> {
        let config = database_url
            .parse()
            .map_err(|e| Error::configuration_with_source("Invalid database URL", e))?;
        let manager = PostgresConnectionManager::new(config, NoTls);

        let pool = Pool::builder()
            .max_size(max_connections.max(1))
            .connection_timeout(connection_timeout)
            .build(manager)
            .map_err(|e| Error::database_with_source("Failed to create connection pool", e))?;

        let mut conn = pool
            .get()
            .map_err(|e| Error::database_with_source("Failed to get database connection", e))?;
        ensure_schema(&mut conn, dimensions)?;
        drop(conn);

        info!(
            dimensions,
            max_connections, "connected to pgvector product store"
        );
        Ok(Self {
            pool: Some(pool),
            dimensions,
        })
    }

    /// Run `op` with a pooled connection on the blocking thread pool
    async fn with_connection<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> Result<T> + Send + 'static,
    {
        let pool = self
            .pool
            .clone()
            .ok_or_else(|| Error::internal("Database pool already released"))?;

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                Error::database_with_source("Failed to get database connection", e)
            })?;
            op(&mut conn)
        })
        .await
        .map_err(|e| Error::internal(format!("Database task failed: {e}")))?
    }
}

impl Drop for PgVectorProductRepository {
    fn drop(&mut self) {
        // The sync client owns a runtime that must not be dropped inside another
        if let Some(pool) = self.pool.take()
            && tokio::runtime::Handle::try_current().is_ok()
        {
            std::thread::spawn(move || drop(pool));
        }
    }
}

fn ensure_schema(conn: &mut PgConnection, dimensions: usize) -> Result<()> {
    let ddl = format!(
        "CREATE EXTENSION IF NOT EXISTS vector;
         CREATE TABLE IF NOT EXISTS {PGVECTOR_TABLE_NAME} (
             id UUID PRIMARY KEY,
             name TEXT NOT NULL,
             image_url TEXT NOT NULL,
             embedding vector({dimensions}) NOT NULL,
             created_at TIMESTAMPTZ NOT NULL DEFAULT now()
         );
         CREATE INDEX IF NOT EXISTS {PGVECTOR_TABLE_NAME}_embedding_idx
             ON {PGVECTOR_TABLE_NAME} USING hnsw (embedding vector_cosine_ops);"
    );
    conn.batch_execute(&ddl)
        .map_err(|e| Error::database_with_source("Failed to prepare product schema", e))?;

    // pgvector stores the declared dimension as the column type modifier
    let row = conn
        .query_one(
            "SELECT atttypmod FROM pg_attribute
             WHERE attrelid = $1::text::regclass AND attname = 'embedding'",
            &[&PGVECTOR_TABLE_NAME],
        )
        .map_err(|e| Error::database_with_source("Failed to inspect product schema", e))?;
    let stored: i32 = row
        .try_get(0)
        .map_err(|e| Error::database_with_source("Failed to read column dimension", e))?;

    if usize::try_from(stored).ok() != Some(dimensions) {
        return Err(Error::configuration(format!(
            "Table '{PGVECTOR_TABLE_NAME}' stores {stored}-dimensional embeddings, \
             configured dimension is {dimensions}"
        )));
    }
    Ok(())
}

fn query_error(context: &str, e: postgres::Error) -> Error {
    Error::database_with_source(context.to_string(), e)
}

fn view_from_row(row: &Row) -> Result<ProductView> {
    let read = |e: postgres::Error| query_error("Failed to decode product row", e);
    let id: Uuid = row.try_get("id").map_err(read)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(read)?;
    Ok(ProductView {
        id: id.to_string(),
        name: row.try_get("name").map_err(read)?,
        image: ImageReference::Url(row.try_get("image_url").map_err(read)?),
        created_at,
    })
}

#[async_trait]
impl ProductRepository for PgVectorProductRepository {
    async fn add(&self, product: Product) -> Result<Product> {
        if product.embedding.len() != self.dimensions {
            return Err(Error::dimension_mismatch(
                self.dimensions,
                product.embedding.len(),
            ));
        }
        let Some(image_url) = product.image.url().map(str::to_owned) else {
            return Err(Error::invalid_argument(
                "Database repository stores image URLs only; configure an image storage provider",
            ));
        };
        let id = Uuid::parse_str(&product.id)
            .map_err(|_| Error::invalid_argument(format!("Invalid product id '{}'", product.id)))?;

        let name = product.name.clone();
        let embedding = Vector::from(product.embedding.clone());
        let created_at = product.created_at;

        self.with_connection(move |conn| {
            let sql = format!(
                "INSERT INTO {PGVECTOR_TABLE_NAME} (id, name, image_url, embedding, created_at)
                 VALUES ($1, $2, $3, $4, $5)"
            );
            conn.execute(&sql, &[&id, &name, &image_url, &embedding, &created_at])
                .map_err(|e| {
                    if e.code() == Some(&SqlState::UNIQUE_VIOLATION) {
                        Error::invalid_argument(format!("Product '{id}' already exists"))
                    } else {
                        query_error("Failed to insert product", e)
                    }
                })?;
            Ok(())
        })
        .await?;

        debug!(id = %product.id, "product stored");
        Ok(product)
    }

    async fn list(&self) -> Result<Vec<ProductView>> {
        self.with_connection(|conn| {
            let sql = format!(
                "SELECT id, name, image_url, created_at FROM {PGVECTOR_TABLE_NAME}
                 ORDER BY created_at, id"
            );
            let rows = conn
                .query(&sql, &[])
                .map_err(|e| query_error("Failed to list products", e))?;
            rows.iter().map(view_from_row).collect()
        })
        .await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        self.with_connection(move |conn| {
            let sql = format!(
                "SELECT id, name, image_url, embedding, created_at FROM {PGVECTOR_TABLE_NAME}
                 WHERE id = $1"
            );
            let Some(row) = conn
                .query_opt(&sql, &[&id])
                .map_err(|e| query_error("Failed to load product", e))?
            else {
                return Ok(None);
            };

            let view = view_from_row(&row)?;
            let embedding: Vector = row
                .try_get("embedding")
                .map_err(|e| query_error("Failed to decode product embedding", e))?;
            Ok(Some(
                Product::new(view.id, view.name, view.image, embedding.to_vec())
                    .with_created_at(view.created_at),
            ))
        })
        .await
    }

    async fn count(&self) -> Result<usize> {
        self.with_connection(|conn| {
            let sql = format!("SELECT COUNT(*) FROM {PGVECTOR_TABLE_NAME}");
            let row = conn
                .query_one(&sql, &[])
                .map_err(|e| query_error("Failed to count products", e))?;
            let count: i64 = row
                .try_get(0)
                .map_err(|e| query_error("Failed to decode product count", e))?;
            Ok(usize::try_from(count).unwrap_or_default())
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(false);
        };

        self.with_connection(move |conn| {
            let sql = format!("DELETE FROM {PGVECTOR_TABLE_NAME} WHERE id = $1");
            let deleted = conn
                .execute(&sql, &[&id])
                .map_err(|e| query_error("Failed to delete product", e))?;
            Ok(deleted > 0)
        })
        .await
    }

    async fn clear(&self) -> Result<Vec<String>> {
        self.with_connection(|conn| {
            let sql = format!("DELETE FROM {PGVECTOR_TABLE_NAME} RETURNING id");
            let rows = conn
                .query(&sql, &[])
                .map_err(|e| query_error("Failed to clear products", e))?;
            rows.iter()
                .map(|row| {
                    row.try_get::<_, Uuid>(0)
                        .map(|id| id.to_string())
                        .map_err(|e| query_error("Failed to decode product id", e))
                })
                .collect()
        })
        .await
    }

    async fn find_similar(&self, query_vector: &[f32], top_k: usize) -> Result<Vec<SearchResult>> {
        if query_vector.len() != self.dimensions {
            return Err(Error::dimension_mismatch(
                self.dimensions,
                query_vector.len(),
            ));
        }
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let query = Vector::from(query_vector.to_vec());
        let limit = i64::try_from(top_k).unwrap_or(i64::MAX);
        let ef_search = ef_search_for(top_k);

        self.with_connection(move |conn| {
            let mut tx = conn
                .transaction()
                .map_err(|e| query_error("Failed to begin transaction", e))?;
            tx.batch_execute(&format!("SET LOCAL hnsw.ef_search = {ef_search}"))
                .map_err(|e| query_error("Failed to set hnsw.ef_search", e))?;
            let rows = tx
                .query(&similarity_query(), &[&query, &limit])
                .map_err(|e| query_error("Similarity query failed", e))?;
            tx.commit()
                .map_err(|e| query_error("Failed to finish similarity query", e))?;

            rows.iter()
                .map(|row| {
                    let distance: f64 = row
                        .try_get("distance")
                        .map_err(|e| query_error("Failed to decode distance", e))?;
                    Ok(SearchResult::new(
                        view_from_row(row)?,
                        distance_to_score(distance),
                    ))
                })
                .collect()
        })
        .await
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "pgvector"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use vsearch_application::ports::registry::{
    PRODUCT_REPOSITORIES, ProductRepositoryConfig, ProductRepositoryEntry,
};
use vsearch_domain::constants::EMBEDDING_DIMENSIONS_DEFAULT;

/// Factory function for creating pgvector repository instances.
///
/// Blocks while connecting.
fn pgvector_repository_factory(
    config: &ProductRepositoryConfig,
) -> std::result::Result<Arc<dyn ProductRepository>, String> {
    let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| "pgvector repository requires a database URL".to_string())?;

    let repository = PgVectorProductRepository::connect(
        database_url,
        config.dimensions.unwrap_or(EMBEDDING_DIMENSIONS_DEFAULT),
        config
            .max_connections
            .unwrap_or(PGVECTOR_MAX_CONNECTIONS_DEFAULT),
        config
            .connection_timeout
            .unwrap_or(Duration::from_secs(PGVECTOR_CONNECTION_TIMEOUT_SECS_DEFAULT)),
    )
    .map_err(|e| format!("Failed to connect to database: {e}"))?;

    Ok(Arc::new(repository))
}

#[linkme::distributed_slice(PRODUCT_REPOSITORIES)]
static PGVECTOR_REPOSITORY: ProductRepositoryEntry = ProductRepositoryEntry {
    name: "pgvector",
    description: "PostgreSQL with the pgvector extension (HNSW cosine index)",
    factory: pgvector_repository_factory,
};
