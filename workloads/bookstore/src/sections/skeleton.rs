//! Skeleton placeholders shown while sections are pending.

/// A single pulsing book-item placeholder.
pub fn render_book_item_skeleton() -> String {
    r#"<div class="book-item book-item--skeleton">
    <div class="skeleton-cover"></div>
    <div>
        <div class="skeleton-line skeleton-line--title"></div>
        <div class="skeleton-line skeleton-line--sub"></div>
    </div>
</div>"#
        .to_string()
}

/// A list of `count` book-item placeholders.
pub fn render_book_list_skeleton(count: usize) -> String {
    let items: String = (0..count).map(|_| render_book_item_skeleton()).collect();
    format!(r#"<div class="book-list book-list--skeleton">{}</div>"#, items)
}

/// Placeholder for a pending review list.
pub fn render_review_list_skeleton() -> String {
    r#"<div class="review-list review-list--skeleton">
    <div class="skeleton-line"></div>
    <div class="skeleton-line"></div>
    <div class="skeleton-line skeleton-line--sub"></div>
</div>"#
        .to_string()
}
