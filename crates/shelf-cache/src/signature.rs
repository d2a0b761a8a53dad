//! Request signatures - the cache key.

use serde::{Deserialize, Serialize};
use shelf_core::Method;

/// Uniquely identifies a cacheable read: HTTP method + full URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestSignature {
    method: String,
    url: String,
}

impl RequestSignature {
    /// Create a signature for an arbitrary method.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method: method.as_str().to_string(),
            url: url.into(),
        }
    }

    /// Create a signature for a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// The request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request method.
    pub fn method(&self) -> &str {
        &self.method
    }
}

impl std::fmt::Display for RequestSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_display() {
        let sig = RequestSignature::get("http://localhost/book");
        assert_eq!(sig.to_string(), "GET http://localhost/book");
    }

    #[test]
    fn test_signature_distinguishes_urls() {
        let a = RequestSignature::get("http://localhost/review/book/1");
        let b = RequestSignature::get("http://localhost/review/book/2");
        assert_ne!(a, b);
    }

    #[test]
    fn test_signature_distinguishes_methods() {
        let get = RequestSignature::new(Method::Get, "http://localhost/review");
        let post = RequestSignature::new(Method::Post, "http://localhost/review");
        assert_ne!(get, post);
    }
}
