//! Search Value Objects
//!
//! Ranked results, the search response envelope and the bounded
//! result-count parameter.

use serde::{Deserialize, Serialize};

use crate::constants::{
    EMPTY_CATALOG_MESSAGE, SEARCH_DEFAULT_TOP_K, SEARCH_MAX_TOP_K, SEARCH_MIN_TOP_K,
};
use crate::entities::ProductView;

/// Value Object: Ranked Search Result
///
/// A product paired with its cosine similarity to the query, rounded to
/// four decimal places.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// The matched product (without its embedding)
    pub product: ProductView,
    /// Cosine similarity in [-1, 1]
    pub score: f64,
}

impl SearchResult {
    pub fn new(product: impl Into<ProductView>, score: f64) -> Self {
        Self {
            product: product.into(),
            score,
        }
    }
}

/// Value Object: Search Response
///
/// Results in descending score order, plus an informational message when
/// the catalog had nothing to rank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchOutcome {
    /// Ranked results, best first
    pub results: Vec<SearchResult>,
    /// Set when the search short-circuited (empty catalog)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchOutcome {
    /// A normal ranked response
    pub fn ranked(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            message: None,
        }
    }

    /// The response for a catalog with no products
    pub fn empty_catalog() -> Self {
        Self {
            results: Vec::new(),
            message: Some(EMPTY_CATALOG_MESSAGE.to_string()),
        }
    }
}

/// Value Object: Result Bound
///
/// The number of results a search returns, always within
/// `[SEARCH_MIN_TOP_K, SEARCH_MAX_TOP_K]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopK(usize);

impl TopK {
    /// Clamp a requested value into range
    ///
    /// Missing or non-positive requests fall back to the default of 10;
    /// anything above the maximum is capped at 50.
    pub fn clamp(requested: Option<i64>) -> Self {
        Self::clamp_within(requested, SEARCH_DEFAULT_TOP_K, SEARCH_MAX_TOP_K)
    }

    /// Clamp with a deployment-specific default and maximum
    pub fn clamp_within(requested: Option<i64>, default: usize, max: usize) -> Self {
        let max = max.max(SEARCH_MIN_TOP_K);
        let value = match requested {
            Some(k) if k > 0 => usize::try_from(k).unwrap_or(max),
            _ => default,
        };
        Self(value.clamp(SEARCH_MIN_TOP_K, max))
    }

    /// The bound as a count
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for TopK {
    fn default() -> Self {
        Self(SEARCH_DEFAULT_TOP_K)
    }
}
