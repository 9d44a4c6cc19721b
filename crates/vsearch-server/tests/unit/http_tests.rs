//! Route tests over Rocket's local client

use rocket::http::{ContentType, Method, Status};
use serde_json::json;

use crate::test_utils::{add_product, body_json, client, client_with, offline_config, post_json};

#[rocket::async_test]
async fn test_liveness_routes() {
    let client = client().await;

    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().await.as_deref(), Some("OK"));

    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["timestamp"].is_string());
}

#[rocket::async_test]
async fn test_health_reports_embeddings_and_count() {
    let client = client().await;
    add_product(&client, "Lamp", "bGFtcA==").await;

    let response = client.get("/vs/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["services"]["embeddings"], "connected");
    assert_eq!(json["productCount"], 1);
}

#[rocket::async_test]
async fn test_add_and_list_products() {
    let client = client().await;

    let (status, json) = post_json(
        &client,
        "/vs/products",
        json!({ "name": "  Desk Lamp  ", "imageBase64": "bGFtcA==" }),
    )
    .await;
    assert_eq!(status, Status::Created);
    let product = &json["product"];
    assert_eq!(product["name"], "Desk Lamp");
    assert_eq!(product["imageBase64"], "bGFtcA==");
    assert!(product["createdAt"].is_string());
    assert!(product.get("embedding").is_none());

    add_product(&client, "Chair", "Y2hhaXI=").await;

    let response = client.get("/vs/products").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let json = body_json(response).await;
    let products = json["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["name"], "Desk Lamp");
    assert_eq!(products[1]["name"], "Chair");
}

#[rocket::async_test]
async fn test_add_product_validation() {
    let client = client().await;

    let (status, json) =
        post_json(&client, "/vs/products", json!({ "imageBase64": "bGFtcA==" })).await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(json["error"], "Invalid request");
    assert_eq!(json["message"], "Product name is required");

    let (status, json) = post_json(&client, "/vs/products", json!({ "name": "Lamp" })).await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(json["message"], "Image is required");
}

#[rocket::async_test]
async fn test_delete_product() {
    let client = client().await;
    let id = add_product(&client, "Lamp", "bGFtcA==").await;

    let response = client.delete(format!("/vs/products/{id}")).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Product deleted successfully");

    let response = client.delete(format!("/vs/products/{id}")).dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Not found");
    assert_eq!(json["message"], "Product not found");
}

#[rocket::async_test]
async fn test_search_empty_catalog() {
    let client = client().await;

    let (status, json) = post_json(&client, "/vs/search", json!({ "imageBase64": "eA==" })).await;
    assert_eq!(status, Status::Ok);
    assert_eq!(json["results"], json!([]));
    assert_eq!(json["message"], "No products in the database yet");
}

#[rocket::async_test]
async fn test_image_search_ranks_exact_match_first() {
    let client = client().await;
    let lamp = add_product(&client, "Lamp", "bGFtcA==").await;
    add_product(&client, "Chair", "Y2hhaXI=").await;
    add_product(&client, "Table", "dGFibGU=").await;

    let (status, json) = post_json(
        &client,
        "/vs/search",
        json!({ "imageBase64": "bGFtcA==", "topK": 2 }),
    )
    .await;
    assert_eq!(status, Status::Ok);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["product"]["id"], lamp.as_str());
    assert_eq!(results[0]["score"], 1.0);
    assert!(results[0]["score"].as_f64() >= results[1]["score"].as_f64());
    assert!(json.get("message").is_none());
}

#[rocket::async_test]
async fn test_top_k_is_clamped() {
    let client = client().await;
    for i in 0..3 {
        add_product(&client, &format!("Item {i}"), &format!("aW1hZ2U{i}")).await;
    }

    for top_k in [json!(0), json!(-4), json!(1.7), json!(500)] {
        let (status, json) = post_json(
            &client,
            "/vs/search/text",
            json!({ "query": "item", "topK": top_k }),
        )
        .await;
        assert_eq!(status, Status::Ok);
        let expected = if top_k == json!(1.7) { 1 } else { 3 };
        assert_eq!(json["results"].as_array().unwrap().len(), expected);
    }
}

#[rocket::async_test]
async fn test_text_search_validation() {
    let client = client().await;

    let (status, json) = post_json(&client, "/vs/search/text", json!({ "query": "   " })).await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(json["error"], "Invalid request");
    assert_eq!(json["message"], "Search query is required");

    let (status, json) = post_json(&client, "/vs/search", json!({})).await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(json["message"], "Image is required");
}

#[rocket::async_test]
async fn test_malformed_bodies_return_json_errors() {
    let client = client().await;

    let response = client
        .post("/vs/search/text")
        .header(ContentType::JSON)
        .body("{not json")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(body_json(response).await["error"], "Invalid request");

    let response = client
        .post("/vs/products")
        .header(ContentType::JSON)
        .body(r#"{"name": 5}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);
    assert_eq!(body_json(response).await["error"], "Invalid request");
}

#[rocket::async_test]
async fn test_json_limit_is_configurable() {
    let mut config = offline_config();
    config.server.json_limit_bytes = 64;
    let client = client_with(config).await;

    let image = "A".repeat(256);
    let (status, json) = post_json(
        &client,
        "/vs/products",
        json!({ "name": "Big", "imageBase64": image }),
    )
    .await;
    assert_eq!(status, Status::PayloadTooLarge);
    assert_eq!(json["error"], "Invalid request");
}

#[rocket::async_test]
async fn test_unknown_route_is_json_404() {
    let client = client().await;

    let response = client.get("/vs/unknown").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(body_json(response).await["error"], "Not found");
}

#[rocket::async_test]
async fn test_cors_headers_and_preflight() {
    let client = client().await;

    let response = client.get("/vs/products").dispatch().await;
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );

    let response = client
        .req(Method::Options, "/vs/search")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NoContent);
    assert!(
        response
            .headers()
            .get_one("Access-Control-Allow-Methods")
            .is_some_and(|m| m.contains("DELETE"))
    );
}

#[rocket::async_test]
async fn test_cors_can_be_disabled() {
    let mut config = offline_config();
    config.server.cors = false;
    let client = client_with(config).await;

    let response = client.get("/vs/products").dispatch().await;
    assert!(
        response
            .headers()
            .get_one("Access-Control-Allow-Origin")
            .is_none()
    );
}
