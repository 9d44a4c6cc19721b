//! Unit tests for search value objects

use vsearch_domain::constants::EMPTY_CATALOG_MESSAGE;
use vsearch_domain::{SearchOutcome, TopK};

#[test]
fn test_top_k_defaults_when_missing() {
    assert_eq!(TopK::clamp(None).get(), 10);
    assert_eq!(TopK::default().get(), 10);
}

#[test]
fn test_top_k_non_positive_falls_back_to_default() {
    assert_eq!(TopK::clamp(Some(0)).get(), 10);
    assert_eq!(TopK::clamp(Some(-7)).get(), 10);
}

#[test]
fn test_top_k_caps_at_maximum() {
    assert_eq!(TopK::clamp(Some(1000)).get(), 50);
    assert_eq!(TopK::clamp(Some(i64::MAX)).get(), 50);
}

#[test]
fn test_top_k_keeps_in_range_values() {
    for k in 1..=50 {
        assert_eq!(TopK::clamp(Some(k)).get(), usize::try_from(k).unwrap());
    }
}

#[test]
fn test_empty_catalog_outcome_serializes_message() {
    let value = serde_json::to_value(SearchOutcome::empty_catalog()).unwrap();
    assert_eq!(value["results"], serde_json::json!([]));
    assert_eq!(value["message"], EMPTY_CATALOG_MESSAGE);
}

#[test]
fn test_ranked_outcome_omits_message() {
    let value = serde_json::to_value(SearchOutcome::ranked(Vec::new())).unwrap();
    assert!(value.get("message").is_none());
}
