//! Vector math for similarity ranking
//!
//! Pure functions shared by every repository strategy: dot product,
//! cosine similarity, score rounding and heap-based top-k selection.
//! Accumulation is done in `f64` so that scores agree with the database
//! strategy to well within the rounding precision.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::constants::SCORE_DECIMAL_PLACES;
use crate::error::{Error, Result};

/// Widen a component, treating NaN as zero
fn component(x: f32) -> f64 {
    if x.is_nan() { 0.0 } else { f64::from(x) }
}

fn ensure_same_length(a: &[f32], b: &[f32]) -> Result<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(Error::dimension_mismatch(a.len(), b.len()))
    }
}

/// Sum of pairwise products
///
/// Fails with `DimensionMismatch` when the lengths differ.
pub fn dot_product(a: &[f32], b: &[f32]) -> Result<f64> {
    ensure_same_length(a, b)?;
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| component(*x) * component(*y))
        .sum())
}

/// Euclidean (L2) norm
pub fn magnitude(v: &[f32]) -> f64 {
    v.iter().map(|x| component(*x).powi(2)).sum::<f64>().sqrt()
}

/// Cosine similarity in [-1, 1]
///
/// Returns exactly 0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64> {
    ensure_same_length(a, b)?;
    Ok(cosine_with_norm(a, b, magnitude(a)))
}

/// Cosine similarity with a precomputed norm for `a`; lengths already checked
fn cosine_with_norm(a: &[f32], b: &[f32], norm_a: f64) -> f64 {
    let norm_b = magnitude(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| component(*x) * component(*y))
        .sum();
    let score = dot / (norm_a * norm_b);
    if score.is_nan() { 0.0 } else { score }
}

/// Round a score to the precision exposed to clients (4 decimals)
pub fn round_score(score: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMAL_PLACES);
    (score * factor).round() / factor
}

/// Scored item for heap-based top-k selection
///
/// Ordered so that the *worst* candidate sits at the top of the
/// `BinaryHeap`: lower score is worse, and among equal scores the later
/// enumeration index is worse.
#[derive(Debug, PartialEq)]
struct ScoredItem {
    score: f64,
    index: usize,
}

impl Eq for ScoredItem {}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rank `items` by cosine similarity to `query` and keep the best `k`
///
/// Results are ordered by descending score; exact ties keep enumeration
/// order. Returns `min(k, items.len())` pairs of item and unrounded score.
/// A single item whose embedding length differs from the query fails the
/// whole call.
pub fn top_k_similar<'a, T, F>(
    query: &[f32],
    items: &'a [T],
    embedding_of: F,
    k: usize,
) -> Result<Vec<(&'a T, f64)>>
where
    F: Fn(&T) -> &[f32],
{
    let query_norm = magnitude(query);

    // Min-heap of the current best k: O(n log k)
    let mut heap: BinaryHeap<ScoredItem> = BinaryHeap::with_capacity(k.saturating_add(1));

    for (index, item) in items.iter().enumerate() {
        let embedding = embedding_of(item);
        ensure_same_length(query, embedding)?;
        let candidate = ScoredItem {
            score: cosine_with_norm(query, embedding, query_norm),
            index,
        };

        if heap.len() < k {
            heap.push(candidate);
        } else if let Some(worst) = heap.peek() {
            if candidate < *worst {
                heap.pop();
                heap.push(candidate);
            }
        }
    }

    // Ascending by `Ord` is best-first
    Ok(heap
        .into_sorted_vec()
        .into_iter()
        .map(|scored| (&items[scored.index], scored.score))
        .collect())
}
