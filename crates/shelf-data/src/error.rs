//! Fetch error types.

use thiserror::Error;

/// Errors that can occur when reading from or writing to the remote API.
///
/// 404 gets its own variant so callers can render a "not found" outcome
/// distinct from other failures.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The resource does not exist (HTTP 404).
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// Any other non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        url: String,
    },

    /// Network-level failure (connect, DNS, broken stream).
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The response body could not be parsed.
    #[error("Failed to parse response: {0}")]
    Deserialization(String),

    /// The URL could not be used to build a request.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),
}

impl FetchError {
    /// Check whether this is the distinguished not-found outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The HTTP status text carried by an `Http` error, if any.
    pub fn status_text(&self) -> Option<String> {
        match self {
            Self::Http { status, message, .. } => Some(format!("{} {}", status, message)),
            Self::NotFound { .. } => Some("404 Not Found".to_string()),
            _ => None,
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_builder() {
            Self::InvalidUrl(url.to_string())
        } else if err.is_decode() {
            Self::Deserialization(err.to_string())
        } else {
            Self::Connection(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinguished() {
        let err = FetchError::NotFound {
            url: "http://api/book/99".to_string(),
        };
        assert!(err.is_not_found());

        let err = FetchError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
            url: "http://api/book/1".to_string(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_status_text_includes_status() {
        let err = FetchError::Http {
            status: 502,
            message: "Bad Gateway".to_string(),
            url: "http://api/review".to_string(),
        };
        assert_eq!(err.status_text().unwrap(), "502 Bad Gateway");
        assert!(FetchError::Timeout.status_text().is_none());
    }
}
