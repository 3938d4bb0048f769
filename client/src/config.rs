//! Client configuration.
//!
//! The backend base URL comes from a single environment variable, read once
//! at startup. The request timeout and default headers are fixed: every
//! outgoing request carries a JSON content type and a permissive CORS
//! declaration, matching what the backend expects from this front end.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Environment variable supplying the API base URL.
pub const BASE_URL_ENV: &str = "LIBRARY_API_BASE_URL";

/// Fixed request timeout applied to every outgoing request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Errors raised while building a [`ClientConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("LIBRARY_API_BASE_URL is not set")]
    MissingBaseUrl,
}

/// Immutable configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub default_headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Build a config for the given base URL with the fixed timeout and
    /// default headers. A trailing slash on the base URL is stripped.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: default_headers(),
        }
    }

    /// Read the base URL from `LIBRARY_API_BASE_URL`, loading a `.env` file
    /// first if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let base_url = env::var(BASE_URL_ENV).map_err(|_| ConfigError::MissingBaseUrl)?;
        Ok(Self::new(&base_url))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn default_headers() -> Vec<(String, String)> {
    vec![
        ("content-type".to_string(), "application/json".to_string()),
        ("access-control-allow-origin".to_string(), "*".to_string()),
    ]
}
