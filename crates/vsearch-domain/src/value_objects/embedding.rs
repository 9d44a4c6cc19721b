//! Embedding Value Objects
//!
//! Value objects representing the vectors produced by an embedding model
//! for both text queries and product images.

use serde::{Deserialize, Serialize};

/// Value Object: Embedding Vector
///
/// A fixed-length vector produced by a joint text/image embedding model.
/// Text and images are embedded into the same space so that a text query
/// can be ranked against image embeddings.
///
/// ## Business Rules
///
/// - `dimensions` always equals `vector.len()`
/// - Every product in a repository shares the same dimensionality
///
/// ## Example
///
/// ```rust
/// use vsearch_domain::value_objects::Embedding;
///
/// let embedding = Embedding::new(vec![0.1, 0.2, 0.3], "jina-clip-v2");
/// assert_eq!(embedding.dimensions, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Build an embedding, deriving `dimensions` from the vector length
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// Consume the embedding and keep only the raw vector
    pub fn into_vector(self) -> Vec<f32> {
        self.vector
    }
}
