//! API utilities for frontend-backend communication
//!
//! Resolves the API base URL, turns HTTP responses into typed results and
//! maps every failure onto [`ApiError`].

use gloo_net::http::{Request, RequestBuilder, Response};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Used when `ORDERS_API_URL` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

static API_BASE: Lazy<String> = Lazy::new(|| normalize_base(option_env!("ORDERS_API_URL")));

/// Get the base URL for API requests
///
/// Taken from the `ORDERS_API_URL` environment variable at build time,
/// falling back to [`DEFAULT_API_BASE`].
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/orders/{}", api_base(), id);
/// ```
pub fn api_base() -> &'static str {
    API_BASE.as_str()
}

/// Build a full API URL from a path starting with `/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn normalize_base(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

/// Console log level, from `ORDERS_LOG_LEVEL` at build time (default `debug`)
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("ORDERS_LOG_LEVEL"))
}

fn parse_log_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(log::Level::Debug)
}

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response; `message` is the body text or the status text
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16, status_text: &str, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            status_text.to_string()
        } else {
            body.to_string()
        };
        ApiError::Status { status, message }
    }
}

/// Start a request with the JSON content type set
pub fn json_request(builder: RequestBuilder) -> RequestBuilder {
    builder.header("Content-Type", "application/json")
}

/// Attach a JSON body
pub fn with_body<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    json_request(builder)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

/// Build a request without a body
pub fn without_body(builder: RequestBuilder) -> Result<Request, ApiError> {
    json_request(builder)
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(
            response.status(),
            &response.status_text(),
            &body,
        ));
    }

    Ok(response)
}

/// Send and parse a JSON body. A 204 response has no body and yields `None`.
pub async fn fetch_json<T: DeserializeOwned>(request: Request) -> Result<Option<T>, ApiError> {
    let response = send(request).await?;
    if response.status() == 204 {
        return Ok(None);
    }
    response
        .json::<T>()
        .await
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Like [`fetch_json`] for endpoints that must return a body
pub async fn fetch_required<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    fetch_json(request)
        .await?
        .ok_or_else(|| ApiError::Decode("empty response body".to_string()))
}

/// Send a request whose response body is ignored
pub async fn fetch_empty(request: Request) -> Result<(), ApiError> {
    send(request).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_and_trims() {
        assert_eq!(normalize_base(None), DEFAULT_API_BASE);
        assert_eq!(normalize_base(Some("  ")), DEFAULT_API_BASE);
        assert_eq!(
            normalize_base(Some("https://api.example.com/")),
            "https://api.example.com"
        );
    }

    #[test]
    fn status_error_prefers_body_text() {
        let err = ApiError::from_status(404, "Not Found", "{\"detail\":\"Order not found\"}");
        assert_eq!(err.to_string(), "{\"detail\":\"Order not found\"}");

        let err = ApiError::from_status(500, "Internal Server Error", "");
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "Internal Server Error".to_string()
            }
        );
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[test]
    fn log_level_parsing() {
        assert_eq!(parse_log_level(None), log::Level::Debug);
        assert_eq!(parse_log_level(Some("warn")), log::Level::Warn);
        assert_eq!(parse_log_level(Some("nonsense")), log::Level::Debug);
    }
}
