//! Tests for the CLIP embedding provider against a local stub server

use std::time::Duration;

use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use vsearch_domain::error::Error;
use vsearch_domain::ports::providers::EmbeddingProvider;
use vsearch_providers::embedding::ClipEmbeddingProvider;

// ============================================================================
// Test Helpers
// ============================================================================

struct StubResponse {
    status: u16,
    body: String,
    delay: Duration,
}

impl StubResponse {
    fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Read one HTTP/1.1 request (headers plus Content-Length body)
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = header_end(&buf) {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Serve the same canned response to every request; raw requests are
/// forwarded on the returned channel
async fn stub_server(response: StubResponse) -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    let response = std::sync::Arc::new(response);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let response = response.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let request = read_request(&mut socket).await;
                let _ = tx.send(request);
                tokio::time::sleep(response.delay).await;
                let raw = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    response.status,
                    response.body.len(),
                    response.body
                );
                let _ = socket.write_all(raw.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{addr}"), rx)
}

fn provider(base_url: String, dimensions: usize, timeout: Duration) -> ClipEmbeddingProvider {
    ClipEmbeddingProvider::new(base_url, dimensions, timeout, Client::new())
}

// ============================================================================
// Embedding calls
// ============================================================================

#[tokio::test]
async fn embed_text_posts_query_and_parses_vector() {
    let (url, mut requests) = stub_server(StubResponse::json(
        200,
        serde_json::json!({ "embedding": [0.5, -0.5, 0.25], "dimensions": 3 }),
    ))
    .await;
    let clip = provider(url, 3, Duration::from_secs(5));

    let embedding = clip.embed_text("blue jacket").await.unwrap();
    assert_eq!(embedding.vector, vec![0.5, -0.5, 0.25]);
    assert_eq!(embedding.dimensions, 3);

    let request = requests.recv().await.unwrap();
    assert!(request.starts_with("POST /embed/text "));
    assert!(request.contains(r#""text":"blue jacket""#));
}

#[tokio::test]
async fn embed_image_sends_image_base64() {
    let (url, mut requests) = stub_server(StubResponse::json(
        200,
        serde_json::json!({ "embedding": [1.0, 0.0], "dimensions": 2 }),
    ))
    .await;
    let clip = provider(url, 2, Duration::from_secs(5));

    clip.embed_image("data:image/png;base64,AAAA").await.unwrap();

    let request = requests.recv().await.unwrap();
    assert!(request.starts_with("POST /embed/image "));
    assert!(request.contains(r#""imageBase64":"data:image/png;base64,AAAA""#));
}

#[tokio::test]
async fn unavailable_model_maps_to_embedding_error() {
    let (url, _requests) = stub_server(StubResponse::json(
        503,
        serde_json::json!({ "detail": "Model not loaded" }),
    ))
    .await;
    let clip = provider(url, 3, Duration::from_secs(5));

    let err = clip.embed_text("anything").await.unwrap_err();
    match err {
        Error::Embedding { message, status } => {
            assert_eq!(status, Some(503));
            assert!(message.contains("Model not loaded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_response_is_an_embedding_error() {
    let (url, _requests) =
        stub_server(StubResponse::json(200, serde_json::json!({ "vector": [] }))).await;
    let clip = provider(url, 3, Duration::from_secs(5));

    let err = clip.embed_text("anything").await.unwrap_err();
    assert!(matches!(err, Error::Embedding { .. }));
}

#[tokio::test]
async fn slow_server_times_out() {
    let (url, _requests) = stub_server(
        StubResponse::json(200, serde_json::json!({ "embedding": [1.0], "dimensions": 1 }))
            .delayed(Duration::from_secs(3)),
    )
    .await;
    let clip = provider(url, 1, Duration::from_millis(200));

    let err = clip.embed_text("anything").await.unwrap_err();
    assert!(err.to_string().contains("timed out"));
}

// ============================================================================
// Health probe
// ============================================================================

#[tokio::test]
async fn healthy_when_model_loaded() {
    let (url, mut requests) =
        stub_server(StubResponse::json(200, serde_json::json!({ "model_loaded": true }))).await;
    let clip = provider(url, 3, Duration::from_secs(5));

    assert!(clip.check_health().await);
    assert!(requests.recv().await.unwrap().starts_with("GET /health "));
}

#[tokio::test]
async fn unhealthy_while_model_loading() {
    let (url, _requests) =
        stub_server(StubResponse::json(200, serde_json::json!({ "model_loaded": false }))).await;
    assert!(!provider(url, 3, Duration::from_secs(5)).check_health().await);
}

#[tokio::test]
async fn unhealthy_when_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let clip = provider(format!("http://{addr}"), 3, Duration::from_millis(500));
    assert!(!clip.check_health().await);
}
