//! Create-review action.

use tracing::{info, warn};

use crate::api::{review_tag, Bookstore};
use crate::data::CreateReviewBody;

use super::{field, ActionResult, FormData};

/// Create a review for a book, then revalidate its review tag.
///
/// Validation happens before any network call: `bookId`, `content`, and
/// `author` must be present and non-empty. The tag is invalidated only
/// after the write is confirmed, so a failed write never marks cached
/// reviews stale.
pub async fn create_review_action(app: &Bookstore, form: &FormData) -> ActionResult {
    let Some(book_id) = field(form, "bookId") else {
        return ActionResult::fail("Missing book id.");
    };
    let Some(content) = field(form, "content") else {
        return ActionResult::fail("Review content is required.");
    };
    let Some(author) = field(form, "author") else {
        return ActionResult::fail("Author is required.");
    };

    let body = CreateReviewBody {
        book_id: book_id.to_string(),
        content: content.to_string(),
        author: author.to_string(),
    };

    match app.create_review(&body).await {
        Ok(_) => {
            let tag = review_tag(book_id);
            let count = app.cache().invalidate_tag(&tag).await;
            info!(book_id, tag, invalidated = count, "review created");
            ActionResult::ok()
        }
        Err(err) => {
            warn!(book_id, error = %err, "create review failed");
            let detail = err.status_text().unwrap_or_else(|| err.to_string());
            ActionResult::fail(format!("Failed to create review: {}", detail))
        }
    }
}

#[cfg(test)]
mod tests {
    use shelf_core::ApiConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn form(entries: &[(&str, &str)]) -> FormData {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    async fn app_for(server: &MockServer) -> Bookstore {
        Bookstore::new(ApiConfig::new(server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_content_fails_without_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/review"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let app = app_for(&server).await;
        let result =
            create_review_action(&app, &form(&[("bookId", "1"), ("author", "alice")])).await;
        assert!(!result.status);
        assert!(result.message.contains("content"));
    }

    #[tokio::test]
    async fn test_successful_create_invalidates_tag() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/review"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 7, "bookId": 1, "content": "great", "author": "alice",
                "createdAt": "2026-08-27T00:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let app = app_for(&server).await;

        // Seed a tagged cache entry so the invalidation is observable.
        app.cache()
            .insert(
                shelf_cache::RequestSignature::get("http://api/review/book/1"),
                "[]",
                shelf_cache::FetchCachePolicy::tagged("review-1"),
            )
            .await;

        let result = create_review_action(
            &app,
            &form(&[("bookId", "1"), ("content", "great"), ("author", "alice")]),
        )
        .await;
        assert!(result.status);
        assert_eq!(app.cache().len().await, 0);
    }

    #[tokio::test]
    async fn test_http_failure_returns_status_text_and_keeps_cache() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/review"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let app = app_for(&server).await;
        app.cache()
            .insert(
                shelf_cache::RequestSignature::get("http://api/review/book/1"),
                "[]",
                shelf_cache::FetchCachePolicy::tagged("review-1"),
            )
            .await;

        let result = create_review_action(
            &app,
            &form(&[("bookId", "1"), ("content", "great"), ("author", "alice")]),
        )
        .await;
        assert!(!result.status);
        assert!(result.message.contains("500 Internal Server Error"));
        // Failed write must not invalidate.
        assert_eq!(app.cache().len().await, 1);
    }
}
