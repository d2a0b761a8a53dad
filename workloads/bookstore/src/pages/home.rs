//! Home page: recommended books and the full catalog.

use std::fmt::Display;

use anyhow::Error;
use futures::Sink;
use shelf_core::WorkloadError;
use shelf_streaming::{ProgressiveRenderer, SectionFallback, SectionTask, StreamingSink};
use tracing::info;

use crate::api::Bookstore;
use crate::sections::{render_book_list, render_book_list_skeleton};

use super::page_shell;

/// Render the home page.
///
/// Two independent sections: recommended books (re-fetched every 3 seconds)
/// and the full catalog (fetched once per process). Each streams the moment
/// its own data resolves; a failure renders an inline error in place.
pub async fn handle_home<S, E>(
    app: &Bookstore,
    sink: &mut StreamingSink<S, E>,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    info!("home page requested");
    let shell = page_shell("Home");
    sink.send_shell(&shell.opening()).await?;

    let reco = {
        let app = app.clone();
        SectionTask::new("reco-books", render_book_list_skeleton(3), async move {
            let books = app.fetch_random_books().await.map_err(Error::from)?;
            Ok(render_book_list(&books))
        })
        .with_lead("<h3>Recommended for you</h3>\n")
        .with_fallback(SectionFallback::inline("Something went wrong..."))
    };

    let all = {
        let app = app.clone();
        SectionTask::new("all-books", render_book_list_skeleton(6), async move {
            let books = app.fetch_all_books().await.map_err(Error::from)?;
            Ok(render_book_list(&books))
        })
        .with_lead("<h3>All books</h3>\n")
        .with_fallback(SectionFallback::inline("Something went wrong..."))
    };

    ProgressiveRenderer::new()
        .section(reco)
        .section(all)
        .run(sink)
        .await?;

    sink.send_raw(shell.closing().into_bytes()).await?;
    sink.complete()
}

#[cfg(test)]
mod tests {
    use futures::channel::mpsc;
    use futures::StreamExt;
    use shelf_core::ApiConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn book_json(id: i64, title: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id, "title": title, "subTitle": "", "author": "a",
            "publisher": "p", "coverImgUrl": "https://covers/x.jpg", "description": ""
        })
    }

    async fn render(app: &Bookstore) -> String {
        let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx);
        handle_home(app, &mut sink).await.unwrap();
        drop(sink);
        let chunks: Vec<Vec<u8>> = rx.collect().await;
        chunks
            .into_iter()
            .map(|c| String::from_utf8(c).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_home_streams_both_sections() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/book"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([book_json(1, "The Trial")])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/book/random"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([book_json(2, "The Castle")])),
            )
            .mount(&server)
            .await;

        let app = Bookstore::new(ApiConfig::new(server.uri()).unwrap()).unwrap();
        let out = render(&app).await;

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("The Trial"));
        assert!(out.contains("The Castle"));
        assert!(out.contains(r#"data-section-slot="reco-books""#));
        assert!(out.contains(r#"data-section-slot="all-books""#));

        // Each rail is titled, heading ahead of its slot.
        let reco_heading = out.find("<h3>Recommended for you</h3>").unwrap();
        let reco_slot = out.find(r#"data-section-slot="reco-books""#).unwrap();
        let all_heading = out.find("<h3>All books</h3>").unwrap();
        let all_slot = out.find(r#"data-section-slot="all-books""#).unwrap();
        assert!(reco_heading < reco_slot);
        assert!(reco_slot < all_heading);
        assert!(all_heading < all_slot);
    }

    #[tokio::test]
    async fn test_home_failed_section_renders_inline_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/book"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/book/random"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([book_json(2, "The Castle")])),
            )
            .mount(&server)
            .await;

        let app = Bookstore::new(ApiConfig::new(server.uri()).unwrap()).unwrap();
        let out = render(&app).await;

        // The failed catalog renders in place; its sibling still paints.
        assert!(out.contains("section-error"));
        assert!(out.contains("The Castle"));
    }
}
