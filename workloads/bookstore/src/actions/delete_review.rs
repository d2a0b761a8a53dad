//! Delete-review action.

use tracing::{info, warn};

use crate::api::{review_tag, Bookstore};

use super::{field, ActionResult, FormData};

/// Delete a review, then revalidate the owning book's review tag.
///
/// `reviewId` is required; without it the action fails before any network
/// call. Invalidation runs only after the delete is confirmed.
pub async fn delete_review_action(app: &Bookstore, form: &FormData) -> ActionResult {
    let Some(review_id) = field(form, "reviewId") else {
        return ActionResult::fail("No review to delete.");
    };
    let book_id = field(form, "bookId");

    match app.delete_review(review_id).await {
        Ok(()) => {
            if let Some(book_id) = book_id {
                let tag = review_tag(book_id);
                let count = app.cache().invalidate_tag(&tag).await;
                info!(review_id, tag, invalidated = count, "review deleted");
            } else {
                warn!(review_id, "review deleted without book id; no tag invalidated");
            }
            ActionResult::ok()
        }
        Err(err) => {
            warn!(review_id, error = %err, "delete review failed");
            let detail = err.status_text().unwrap_or_else(|| err.to_string());
            ActionResult::fail(format!("Failed to delete review: {}", detail))
        }
    }
}

#[cfg(test)]
mod tests {
    use shelf_cache::{FetchCachePolicy, RequestSignature};
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

    #[tokio::test]
    async fn test_missing_review_id_fails_without_network() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let app = Bookstore::new(ApiConfig::new(server.uri()).unwrap()).unwrap();
        let result = delete_review_action(&app, &form(&[("bookId", "1")])).await;
        assert!(!result.status);
    }

    #[tokio::test]
    async fn test_successful_delete_invalidates_tag() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/review/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let app = Bookstore::new(ApiConfig::new(server.uri()).unwrap()).unwrap();
        app.cache()
            .insert(
                RequestSignature::get("http://api/review/book/1"),
                "[]",
                FetchCachePolicy::tagged("review-1"),
            )
            .await;

        let result =
            delete_review_action(&app, &form(&[("reviewId", "7"), ("bookId", "1")])).await;
        assert!(result.status);
        assert_eq!(app.cache().len().await, 0);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_tag_valid() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/review/42"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let app = Bookstore::new(ApiConfig::new(server.uri()).unwrap()).unwrap();
        app.cache()
            .insert(
                RequestSignature::get("http://api/review/book/1"),
                "[]",
                FetchCachePolicy::tagged("review-1"),
            )
            .await;

        let result =
            delete_review_action(&app, &form(&[("reviewId", "42"), ("bookId", "1")])).await;
        assert!(!result.status);
        assert!(result.message.contains("404 Not Found"));
        assert_eq!(app.cache().len().await, 1);
    }
}
