//! Error mapping and request parsing tests

use rocket::http::Status;
use vsearch_domain::error::Error;
use vsearch_domain::value_objects::TopK;
use vsearch_server::error::api_error;
use vsearch_server::models::requested_top_k;

#[test]
fn test_validation_maps_to_400() {
    let (status, body) = api_error(&Error::invalid_argument("Image is required"), "Search failed");
    assert_eq!(status, Status::BadRequest);
    assert_eq!(body.error, "Invalid request");
    assert_eq!(body.message, "Image is required");
}

#[test]
fn test_not_found_maps_to_404() {
    let (status, body) = api_error(&Error::not_found("Product"), "Failed to delete product");
    assert_eq!(status, Status::NotFound);
    assert_eq!(body.message, "Product not found");
}

#[test]
fn test_server_faults_map_to_500_with_label() {
    let (status, body) = api_error(&Error::dimension_mismatch(1024, 512), "Search failed");
    assert_eq!(status, Status::InternalServerError);
    assert_eq!(body.error, "Search failed");
    assert!(body.message.contains("1024"));

    let (status, body) = api_error(
        &Error::embedding_with_status("model unavailable", 503),
        "Failed to add product",
    );
    assert_eq!(status, Status::InternalServerError);
    assert_eq!(body.error, "Failed to add product");
}

#[test]
fn test_requested_top_k() {
    assert_eq!(requested_top_k(None), None);
    assert_eq!(requested_top_k(Some(5.0)), Some(5));
    assert_eq!(requested_top_k(Some(2.9)), Some(2));
    assert_eq!(requested_top_k(Some(-3.0)), Some(-3));
    assert_eq!(requested_top_k(Some(f64::NAN)), None);
}

#[test]
fn test_positive_fraction_below_one_clamps_to_one() {
    assert_eq!(requested_top_k(Some(0.5)), Some(1));
    assert_eq!(TopK::clamp(requested_top_k(Some(0.5))).get(), 1);
    assert_eq!(requested_top_k(Some(-0.5)), Some(0));
}
