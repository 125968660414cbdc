//! Single-attempt request helper.
//!
//! Sends a request once, turns non-2xx responses into
//! [`RequestError::Status`] with the response body attached, and records
//! request metrics when a collector is supplied.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::debug;

use crate::error::RequestError;
use crate::metrics::MetricsCollector;

/// Sends an HTTP request exactly once.
///
/// # Arguments
///
/// * `builder` - The `reqwest::RequestBuilder` to execute
/// * `endpoint` - Endpoint label used for logs and metrics
/// * `method` - HTTP method label used for logs and metrics
/// * `metrics` - Optional metrics collector
///
/// # Errors
///
/// - `RequestError::Http` for transport failures
/// - `RequestError::Status` for non-2xx responses (status, URL and body captured)
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response, RequestError> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }

    let start = Instant::now();
    let result = send_once(builder).await;
    let elapsed = start.elapsed();

    match &result {
        Ok(response) => debug!(
            endpoint,
            method,
            status = response.status().as_u16(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Request completed"
        ),
        Err(e) => debug!(
            endpoint,
            method,
            status = ?e.status(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Request failed"
        ),
    }

    if let Some(m) = metrics {
        let status = match &result {
            Ok(response) => Some(response.status().as_u16()),
            Err(e) => e.status(),
        };
        m.record_request_duration(endpoint, method, elapsed, status);
        if let Err(e) = &result {
            m.record_request_error(endpoint, method, e);
        }
    }

    result
}

async fn send_once(builder: RequestBuilder) -> Result<Response, RequestError> {
    let response = builder.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    Err(RequestError::Status {
        status: status.as_u16(),
        url,
        body,
    })
}

/// Reads the full response body and deserializes it as JSON.
///
/// The body text is kept on failure so callers can report it.
///
/// # Errors
///
/// - `RequestError::Http` if the body cannot be read
/// - `RequestError::Decode` if the body is not valid JSON for `T`
pub async fn read_json<T: DeserializeOwned>(
    response: Response,
    endpoint: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<T, RequestError> {
    let status = response.status().as_u16();
    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| {
        if let Some(m) = metrics {
            m.record_deserialization_failure(endpoint, std::any::type_name::<T>());
        }
        RequestError::Decode {
            status,
            body,
            message: e.to_string(),
        }
    })
}
