//! Review list and editor renderers.

use crate::data::Review;

use super::escape_html;

/// Render one review with its delete control.
pub fn render_review_item(review: &Review) -> String {
    format!(
        r#"<article class="review-item">
    <div class="review-author">{author}</div>
    <div class="review-content">{content}</div>
    <footer class="review-footer">
        <span class="review-date">{date}</span>
        <form method="post" action="/actions/delete-review" class="review-delete">
            <input type="hidden" name="reviewId" value="{id}">
            <input type="hidden" name="bookId" value="{book_id}">
            <button type="submit">Delete</button>
        </form>
    </footer>
</article>"#,
        author = escape_html(&review.author),
        content = escape_html(&review.content),
        date = review.created_at.format("%Y-%m-%d %H:%M"),
        id = review.id,
        book_id = review.book_id,
    )
}

/// Render the review list for a book.
pub fn render_review_list(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return r#"<div class="review-list review-list--empty">No reviews yet.</div>"#.to_string();
    }
    let items: String = reviews.iter().map(render_review_item).collect();
    format!(r#"<div class="review-list">{}</div>"#, items)
}

/// Render the review editor form.
///
/// The pending state is handled client-side: the submit button disables
/// while the action is in flight.
pub fn render_review_editor(book_id: &str) -> String {
    format!(
        r#"<section class="review-editor">
    <form method="post" action="/actions/create-review" onsubmit="this.querySelector('button').disabled = true">
        <input type="hidden" name="bookId" value="{book_id}">
        <textarea required name="content" placeholder="Write a review"></textarea>
        <div class="submit-row">
            <input required name="author" placeholder="Author">
            <button type="submit">Submit</button>
        </div>
    </form>
</section>"#,
        book_id = escape_html(book_id),
    )
}
