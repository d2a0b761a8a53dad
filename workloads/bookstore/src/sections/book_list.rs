//! Book list section renderer.

use crate::data::Book;

use super::escape_html;

/// Render one book item linking to its detail page.
pub fn render_book_item(book: &Book) -> String {
    format!(
        r#"<a href="/book/{id}" class="book-item">
    <img src="{cover}" alt="{title}" width="100" height="100">
    <div>
        <div class="book-title">{title}</div>
        <div class="book-subtitle">{subtitle}</div>
        <div class="book-author">{author} | {publisher}</div>
    </div>
</a>"#,
        id = book.id,
        cover = escape_html(&book.cover_img_url),
        title = escape_html(&book.title),
        subtitle = escape_html(&book.sub_title),
        author = escape_html(&book.author),
        publisher = escape_html(&book.publisher),
    )
}

/// Render a list of books.
pub fn render_book_list(books: &[Book]) -> String {
    let items: String = books.iter().map(render_book_item).collect();
    format!(r#"<div class="book-list">{}</div>"#, items)
}

/// Render the empty-results state for a search.
pub fn render_no_results(q: &str) -> String {
    format!(
        r#"<div class="book-list book-list--empty">No books found for "{}".</div>"#,
        escape_html(q)
    )
}
