//! Book detail section renderer.

use crate::data::Book;

use super::escape_html;

/// Render the book detail panel.
pub fn render_book_detail(book: &Book) -> String {
    format!(
        r#"<section class="book-detail" data-book-id="{id}">
    <div class="cover-panel" style="background-image: url('{cover}')">
        <img src="{cover}" alt="{title}" width="300" height="400">
    </div>
    <div class="book-title">{title}</div>
    <div class="book-subtitle">{subtitle}</div>
    <div class="book-author">{author} | {publisher}</div>
    <div class="book-description">{description}</div>
</section>"#,
        id = book.id,
        cover = escape_html(&book.cover_img_url),
        title = escape_html(&book.title),
        subtitle = escape_html(&book.sub_title),
        author = escape_html(&book.author),
        publisher = escape_html(&book.publisher),
        description = escape_html(&book.description),
    )
}

/// Render the not-found outcome for a missing book.
///
/// Distinct from the generic failure rendering so a 404 reads as "this book
/// does not exist" rather than "something broke".
pub fn render_book_not_found() -> String {
    r#"<section class="book-detail book-detail--not-found">
    <h3>Book not found</h3>
    <p>The book you are looking for does not exist.</p>
</section>"#
        .to_string()
}

/// Render the generic failure state for the detail section.
pub fn render_book_detail_error() -> String {
    r#"<section class="book-detail book-detail--error">Something went wrong...</section>"#
        .to_string()
}
