//! Product Repository Interface
//!
//! Persistence and similarity ranking for catalog products.

use async_trait::async_trait;

use crate::entities::{Product, ProductView};
use crate::error::Result;
use crate::value_objects::SearchResult;

/// Repository: Product Persistence and Nearest-Neighbour Ranking
///
/// Two strategies implement this contract with identical observable
/// behavior: a linear scan over products held in memory, and a database
/// with a native vector index that ranks in a single query.
///
/// # Example
///
/// ```ignore
/// use vsearch_domain::repositories::ProductRepository;
///
/// repo.add(product).await?;
/// let results = repo.find_similar(&query_vec, 10).await?;
/// for result in results {
///     println!("{}: score={:.4}", result.product.name, result.score);
/// }
/// ```
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product, durable before returning
    ///
    /// Fails with `DimensionMismatch` when the embedding length differs
    /// from [`ProductRepository::dimensions`], and with `InvalidArgument`
    /// when the id already exists.
    async fn add(&self, product: Product) -> Result<Product>;

    /// All products in creation order (oldest first)
    async fn list(&self) -> Result<Vec<ProductView>>;

    /// Look up one product; absence is `None`, not an error
    async fn get_by_id(&self, id: &str) -> Result<Option<Product>>;

    /// Number of stored products
    async fn count(&self) -> Result<usize>;

    /// Remove a product; `Ok(false)` when it did not exist
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Remove every product, returning the removed ids
    async fn clear(&self) -> Result<Vec<String>>;

    /// Up to `top_k` products ranked by descending cosine similarity
    ///
    /// Scores are rounded to 4 decimals. An empty catalog yields `[]`.
    async fn find_similar(&self, query_vector: &[f32], top_k: usize) -> Result<Vec<SearchResult>>;

    /// Embedding length every stored product must have
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this repository strategy
    fn provider_name(&self) -> &str;
}
