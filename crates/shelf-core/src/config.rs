//! Remote API configuration.

use serde::{Deserialize, Serialize};

/// Environment variable holding the remote API base URL.
pub const API_SERVER_URL_VAR: &str = "API_SERVER_URL";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Configuration for the remote book/review API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the remote API (no trailing slash).
    pub base_url: String,
}

impl ApiConfig {
    /// Create a configuration with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let mut base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { base_url })
    }

    /// Load the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(API_SERVER_URL_VAR)
            .map_err(|_| ConfigError::MissingVar(API_SERVER_URL_VAR))?;
        Self::new(base_url)
    }

    /// Build a full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
