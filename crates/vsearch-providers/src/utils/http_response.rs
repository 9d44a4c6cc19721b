//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from remote providers.
//! These are shared utilities, not ports.

use reqwest::Response;
use vsearch_domain::error::{Error, Result};

/// Format error message for embedding provider
fn embedding_error(provider: &str, context: &str, details: &str, status: Option<u16>) -> Error {
    let message = format!("{provider} {context}: {details}");
    match status {
        Some(code) => Error::embedding_with_status(message, code),
        None => Error::embedding(message),
    }
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON for an embedding call
    ///
    /// Non-success statuses become `Embedding` errors carrying the status
    /// code and upstream body.
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 => {
                    embedding_error(provider_name, "authentication failed", &error_text, Some(code))
                }
                429 => {
                    embedding_error(provider_name, "rate limit exceeded", &error_text, Some(code))
                }
                503 => {
                    embedding_error(provider_name, "model unavailable", &error_text, Some(code))
                }
                500..=599 => embedding_error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                    Some(code),
                ),
                _ => embedding_error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                    Some(code),
                ),
            });
        }

        response.json().await.map_err(|e| {
            embedding_error(provider_name, "response parse failed", &e.to_string(), None)
        })
    }

    /// Check a storage response, discarding the body on success
    pub async fn ensure_storage_success(response: Response, provider_name: &str) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(Error::storage(format!(
            "{provider_name} request failed ({}): {error_text}",
            status.as_u16()
        )))
    }
}
