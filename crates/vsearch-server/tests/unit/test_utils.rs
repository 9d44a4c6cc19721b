//! Shared helpers for the HTTP tests

use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::{Client, LocalResponse};
use serde_json::Value;
use vsearch_infrastructure::config::AppConfig;
use vsearch_infrastructure::di::init_app;
use vsearch_server::build_rocket;

/// Offline configuration: deterministic embeddings, in-memory catalog, inline images
pub fn offline_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.embedding.provider = "null".to_string();
    config.embedding.dimensions = 8;
    config.repository.data_file = None;
    config
}

/// Client over a fresh offline application
pub async fn client() -> Client {
    client_with(offline_config()).await
}

pub async fn client_with(config: AppConfig) -> Client {
    let context = init_app(config).await.expect("offline context");
    Client::tracked(build_rocket(context))
        .await
        .expect("valid rocket instance")
}

pub async fn body_json(response: LocalResponse<'_>) -> Value {
    let body = response.into_string().await.expect("response body");
    serde_json::from_str(&body).expect("JSON body")
}

pub async fn post_json(client: &Client, path: &str, body: Value) -> (Status, Value) {
    let response = client
        .post(path.to_string())
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch()
        .await;
    let status = response.status();
    (status, body_json(response).await)
}

/// Add a product and return its id
pub async fn add_product(client: &Client, name: &str, image: &str) -> String {
    let (status, json) = post_json(
        client,
        "/vs/products",
        serde_json::json!({ "name": name, "imageBase64": image }),
    )
    .await;
    assert_eq!(status, Status::Created);
    json["product"]["id"].as_str().expect("product id").to_string()
}
