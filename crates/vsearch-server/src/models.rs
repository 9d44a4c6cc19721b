//! Request and response bodies
//!
//! Field names are camelCase on the wire. Request fields are optional so a
//! missing field produces a validation message instead of a parse failure.

use serde::{Deserialize, Serialize};
use vsearch_domain::entities::ProductView;

/// `POST /vs/products`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    pub name: Option<String>,
    pub image_base64: Option<String>,
}

/// `POST /vs/search`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSearchRequest {
    pub image_base64: Option<String>,
    pub top_k: Option<f64>,
}

/// `POST /vs/search/text`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSearchRequest {
    pub query: Option<String>,
    pub top_k: Option<f64>,
}

/// Interpret a JSON `topK`; fractions are truncated and non-finite values ignored
///
/// A positive fraction below 1 still counts as positive and becomes 1.
pub fn requested_top_k(top_k: Option<f64>) -> Option<i64> {
    top_k.filter(|k| k.is_finite()).map(|k| {
        if k > 0.0 {
            k.trunc().max(1.0) as i64
        } else {
            k.trunc() as i64
        }
    })
}

/// Service status block of the health response
#[derive(Debug, Serialize)]
pub struct HealthServices {
    pub embeddings: &'static str,
}

/// `GET /vs/health`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub services: HealthServices,
    pub product_count: usize,
}

/// `GET /health`
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// `GET /vs/products`
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductView>,
}

/// `POST /vs/products`
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: ProductView,
}

/// `DELETE /vs/products/<id>`
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
