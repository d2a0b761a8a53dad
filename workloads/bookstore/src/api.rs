//! Typed wrappers for the remote book/review API.

use std::sync::Arc;
use std::time::Duration;

use shelf_cache::{CacheStore, FetchCachePolicy};
use shelf_core::ApiConfig;
use shelf_data::{FetchClient, FetchError};

use crate::data::{Book, CreateReviewBody, Review};

/// Recommended books are time-boxed: re-fetched every 3 seconds.
pub const RANDOM_BOOKS_TTL: Duration = Duration::from_secs(3);

/// Invalidation tag binding all review reads for one book.
pub fn review_tag(book_id: &str) -> String {
    format!("review-{}", book_id)
}

/// The bookstore application: configuration plus the cached fetch client.
#[derive(Clone)]
pub struct Bookstore {
    config: ApiConfig,
    client: FetchClient,
}

impl Bookstore {
    /// Create an application with its own cache store.
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        Self::with_cache(config, Arc::new(CacheStore::new()))
    }

    /// Create an application sharing an existing cache store.
    pub fn with_cache(config: ApiConfig, cache: Arc<CacheStore>) -> Result<Self, FetchError> {
        Ok(Self {
            config,
            client: FetchClient::new(cache)?,
        })
    }

    /// The remote API configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The underlying fetch client.
    pub fn client(&self) -> &FetchClient {
        &self.client
    }

    /// The shared cache store.
    pub fn cache(&self) -> &Arc<CacheStore> {
        self.client.cache()
    }

    /// `GET /book` - every registered book. Fetched once per process.
    pub async fn fetch_all_books(&self) -> Result<Vec<Book>, FetchError> {
        self.client
            .get_json(&self.config.url("/book"), FetchCachePolicy::ForceCache)
            .await
    }

    /// `GET /book/random` - recommended books, re-fetched every 3 seconds.
    pub async fn fetch_random_books(&self) -> Result<Vec<Book>, FetchError> {
        self.client
            .get_json(
                &self.config.url("/book/random"),
                FetchCachePolicy::revalidate(RANDOM_BOOKS_TTL),
            )
            .await
    }

    /// `GET /book/{id}` - one book, or `FetchError::NotFound`.
    pub async fn fetch_book(&self, id: &str) -> Result<Book, FetchError> {
        self.client
            .get_json(
                &self.config.url(&format!("/book/{}", id)),
                FetchCachePolicy::NoStore,
            )
            .await
    }

    /// `GET /book/search?q=` - title/author search.
    pub async fn search_books(&self, q: &str) -> Result<Vec<Book>, FetchError> {
        self.client
            .get_json(
                &self
                    .config
                    .url(&format!("/book/search?q={}", encode_query(q))),
                FetchCachePolicy::NoStore,
            )
            .await
    }

    /// `GET /review/book/{bookId}` - reviews, cache-tagged `review-{bookId}`.
    pub async fn fetch_reviews(&self, book_id: &str) -> Result<Vec<Review>, FetchError> {
        self.client
            .get_json(
                &self.config.url(&format!("/review/book/{}", book_id)),
                FetchCachePolicy::tagged(review_tag(book_id)),
            )
            .await
    }

    /// `POST /review` - create a review. Never cached.
    pub async fn create_review(
        &self,
        body: &CreateReviewBody,
    ) -> Result<serde_json::Value, FetchError> {
        self.client
            .post_json(&self.config.url("/review"), body)
            .await
    }

    /// `DELETE /review/{reviewId}` - delete a review. Never cached.
    pub async fn delete_review(&self, review_id: &str) -> Result<(), FetchError> {
        self.client
            .delete(&self.config.url(&format!("/review/{}", review_id)))
            .await
    }
}

/// Percent-encode a query value.
fn encode_query(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_tag_format() {
        assert_eq!(review_tag("1"), "review-1");
        assert_eq!(review_tag("42"), "review-42");
    }

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query("rust"), "rust");
        assert_eq!(encode_query("the trial"), "the%20trial");
        assert_eq!(encode_query("a&b=c"), "a%26b%3Dc");
    }
}
