//! Unit tests for vector math

use vsearch_domain::Error;
use vsearch_domain::similarity::{
    cosine_similarity, dot_product, magnitude, round_score, top_k_similar,
};

const EPSILON: f64 = 1e-9;

#[test]
fn test_dimension_mismatch_is_rejected() {
    let err = cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch {
            expected: 2,
            actual: 3
        }
    ));

    assert!(matches!(
        dot_product(&[1.0], &[]),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn test_zero_vector_scores_zero() {
    assert_eq!(cosine_similarity(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]).unwrap(), 0.0);
    assert_eq!(cosine_similarity(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]).unwrap(), 0.0);
}

#[test]
fn test_self_similarity_is_one() {
    let vectors: [&[f32]; 3] = [&[1.0, 2.0, 3.0], &[-0.3, 0.7, 0.01, 5.0], &[1e-3]];
    for v in vectors {
        assert!((cosine_similarity(v, v).unwrap() - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_opposite_vectors_score_minus_one() {
    let score = cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]).unwrap();
    assert!((score + 1.0).abs() < 1e-6);
}

#[test]
fn test_dot_product_and_magnitude() {
    assert!((dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap() - 32.0).abs() < EPSILON);
    assert!((magnitude(&[3.0, 4.0]) - 5.0).abs() < EPSILON);
}

#[test]
fn test_round_score_four_decimals() {
    assert_eq!(round_score(0.993_883_7), 0.9939);
    assert_eq!(round_score(1.0), 1.0);
    assert_eq!(round_score(-0.123_46), -0.1235);
}

#[test]
fn test_top_k_bound_holds_for_every_k() {
    let items: Vec<Vec<f32>> = (0..7u8)
        .map(|i| vec![f32::from(i), 1.0, f32::from(i % 3)])
        .collect();
    let query = [1.0, 0.5, 0.25];

    for k in 0..10 {
        let ranked = top_k_similar(&query, &items, |v| v.as_slice(), k).unwrap();
        assert_eq!(ranked.len(), k.min(items.len()));
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }
}

#[test]
fn test_top_k_on_empty_items() {
    let items: Vec<Vec<f32>> = Vec::new();
    let ranked = top_k_similar(&[1.0, 0.0], &items, |v| v.as_slice(), 5).unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn test_top_k_ties_keep_enumeration_order() {
    let items = vec![
        ("a", vec![1.0_f32, 0.0]),
        ("b", vec![2.0, 0.0]),
        ("c", vec![0.0, 1.0]),
        ("d", vec![3.0, 0.0]),
    ];
    let ranked = top_k_similar(&[1.0, 0.0], &items, |(_, v)| v.as_slice(), 3).unwrap();
    let names: Vec<&str> = ranked.iter().map(|(item, _)| item.0).collect();
    assert_eq!(names, vec!["a", "b", "d"]);
}

#[test]
fn test_top_k_fails_on_mismatched_item() {
    let items = vec![vec![1.0_f32, 0.0], vec![1.0, 0.0, 0.0]];
    let result = top_k_similar(&[1.0, 0.0], &items, |v| v.as_slice(), 1);
    assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
}

#[test]
fn test_reference_scenario_ranking() {
    let items = vec![
        ("product1", vec![1.0_f32, 0.0, 0.0]),
        ("product2", vec![0.0, 1.0, 0.0]),
        ("product3", vec![0.9, 0.1, 0.0]),
    ];
    let ranked = top_k_similar(&[1.0, 0.0, 0.0], &items, |(_, v)| v.as_slice(), 10).unwrap();

    let names: Vec<&str> = ranked.iter().map(|(item, _)| item.0).collect();
    assert_eq!(names, vec!["product1", "product3", "product2"]);
    assert_eq!(round_score(ranked[0].1), 1.0);
    assert_eq!(round_score(ranked[1].1), 0.9939);
    assert_eq!(round_score(ranked[2].1), 0.0);
}
