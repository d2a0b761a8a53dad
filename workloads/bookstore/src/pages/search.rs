//! Search page: a query-keyed streaming section.

use std::fmt::Display;

use futures::Sink;
use shelf_core::WorkloadError;
use shelf_streaming::{render_replacement, render_slot, SectionKey, StreamingSink};
use tracing::{info, warn};

use crate::api::Bookstore;
use crate::sections::{render_book_list, render_book_list_skeleton, render_no_results};

use super::page_shell;

/// Render the search page for a query.
///
/// The results section is keyed by the query: starting a render supersedes
/// any in-flight render for an older query, and a superseded result is
/// discarded instead of painted. The skeleton always streams; only the
/// latest query's replacement does.
pub async fn handle_search<S, E>(
    app: &Bookstore,
    key: &SectionKey,
    q: &str,
    sink: &mut StreamingSink<S, E>,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    info!(q, "search requested");
    let token = key.begin(q);

    let shell = page_shell("Search");
    sink.send_shell(&shell.opening()).await?;
    sink.send_raw(render_slot("search-results", &render_book_list_skeleton(3)).into_bytes())
        .await?;

    let html = match app.search_books(q).await {
        Ok(books) if books.is_empty() => render_no_results(q),
        Ok(books) => render_book_list(&books),
        Err(err) => {
            warn!(q, error = %err, "search failed");
            r#"<div class="section-error">Something went wrong...</div>"#.to_string()
        }
    };

    match key.commit(&token, html) {
        Some(html) => {
            sink.send_section("search-results", &render_replacement("search-results", &html))
                .await?;
        }
        None => {
            // A newer query superseded this render; its handler owns the
            // visible result.
            info!(q, "search render superseded; discarding result");
        }
    }

    sink.send_raw(shell.closing().into_bytes()).await?;
    sink.complete()
}
