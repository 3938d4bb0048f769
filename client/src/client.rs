//! Shared request builder and response parser for the library API.
//!
//! # Design
//! `ApiClient` holds only its [`ClientConfig`] and carries no mutable state
//! between calls. It is constructed once and passed (borrowed) into each
//! resource module rather than living as a process-wide global. Every
//! resource operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`;
//! the caller executes the actual HTTP round-trip, keeping the client
//! deterministic and free of I/O dependencies.
//!
//! All five resources share the same four request/response shapes, so the
//! verb-level builders and parsers live here and the resource modules only
//! supply their collection path and record types.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::{ClientConfig, ConfigError};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Synchronous, stateless client for the library API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. Resource handles are obtained from the accessor
/// methods each resource module adds (`client.authors()`, `client.books()`,
/// …); no retry, no interceptors, no auth.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Construct from the environment (`LIBRARY_API_BASE_URL`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        let req = HttpRequest {
            method,
            url: format!("{}{path}", self.config.base_url),
            headers: self.config.default_headers.clone(),
            body,
            timeout: self.config.timeout,
        };
        debug!(method = ?req.method, url = %req.url, "built request");
        req
    }

    pub(crate) fn build_get(&self, path: &str) -> HttpRequest {
        self.request(HttpMethod::Get, path, None)
    }

    pub(crate) fn build_post<T: Serialize>(&self, path: &str, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.request(HttpMethod::Post, path, Some(body)))
    }

    pub(crate) fn build_put<T: Serialize>(&self, path: &str, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.request(HttpMethod::Put, path, Some(body)))
    }

    pub(crate) fn build_delete(&self, path: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, path, None)
    }

    pub(crate) fn parse_list<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<Vec<T>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub(crate) fn parse_created<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub(crate) fn parse_updated<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub(crate) fn parse_destroyed(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    debug!(status = response.status, expected, "unexpected response status");
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
