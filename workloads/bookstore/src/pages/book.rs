//! Book detail page: detail panel, review editor, review list.

use std::fmt::Display;

use anyhow::Error;
use futures::Sink;
use shelf_core::WorkloadError;
use shelf_data::FetchError;
use shelf_streaming::{ProgressiveRenderer, SectionFallback, SectionTask, StreamingSink};
use tracing::{error, info};

use crate::api::Bookstore;
use crate::sections::{
    render_book_detail, render_book_detail_error, render_book_not_found, render_review_editor,
    render_review_list, render_review_list_skeleton,
};

use super::{page_shell, render_error_boundary};

/// Render the book detail page.
///
/// The detail fetch is critical: a 404 renders the not-found outcome and
/// any other failure renders the generic error, both ending the page. With
/// a book in hand, the editor streams immediately and the review list runs
/// as a propagating section: if it fails, the page is interrupted by the
/// error boundary, which offers a retry.
pub async fn handle_book_detail<S, E>(
    app: &Bookstore,
    book_id: &str,
    sink: &mut StreamingSink<S, E>,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    info!(book_id, "book detail requested");
    let shell = page_shell("Book");
    sink.send_shell(&shell.opening()).await?;

    let book = match app.fetch_book(book_id).await {
        Ok(book) => book,
        Err(FetchError::NotFound { .. }) => {
            info!(book_id, "book not found");
            sink.send_section("book", &render_book_not_found()).await?;
            sink.send_raw(shell.closing().into_bytes()).await?;
            return sink.complete();
        }
        Err(err) => {
            error!(book_id, error = %err, "book detail fetch failed");
            sink.send_section("book", &render_book_detail_error())
                .await?;
            sink.send_raw(shell.closing().into_bytes()).await?;
            return sink.complete();
        }
    };

    sink.send_section("book", &render_book_detail(&book)).await?;
    sink.send_section("review-editor", &render_review_editor(book_id))
        .await?;

    let reviews = {
        let app = app.clone();
        let book_id = book_id.to_string();
        SectionTask::new("review-list", render_review_list_skeleton(), async move {
            let reviews = app.fetch_reviews(&book_id).await.map_err(Error::from)?;
            Ok(render_review_list(&reviews))
        })
        .with_fallback(SectionFallback::Propagate)
    };

    match ProgressiveRenderer::new().section(reviews).run(sink).await {
        Ok(()) => {}
        Err(WorkloadError::SectionFailed(name, message)) => {
            // Review failures interrupt the page rather than degrading it.
            error!(section = %name, %message, "section failed; rendering error boundary");
            sink.send_section("error-boundary", &render_error_boundary())
                .await?;
        }
        Err(err) => return Err(err),
    }

    sink.send_raw(shell.closing().into_bytes()).await?;
    sink.complete()
}
