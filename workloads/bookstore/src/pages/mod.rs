//! Page handlers composing sections over a streaming sink.

mod book;
mod error;
mod home;
mod search;

pub use book::*;
pub use error::*;
pub use home::*;
pub use search::*;

use crate::sections::escape_html;

/// Static frame around every bookstore page: head with inline styles, the
/// site header with the search bar, and the content area sections stream
/// into. Split so the opening half flushes before any data is fetched.
pub(crate) struct PageShell {
    title: String,
}

pub(crate) fn page_shell(title: &str) -> PageShell {
    PageShell {
        title: title.to_string(),
    }
}

impl PageShell {
    /// Everything up to the open content area.
    pub(crate) fn opening(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Bookstand</title>
<style>{styles}</style>
</head>
<body>
<header class="site-header">
    <a href="/" class="site-logo">Bookstand</a>
    <form class="searchbar" method="get" action="/search">
        <input name="q" placeholder="Search books">
        <button type="submit">Search</button>
    </form>
</header>
<main class="page-container">
"#,
            title = escape_html(&self.title),
            styles = BOOKSTORE_STYLES,
        )
    }

    /// Closing frame, flushed after the last section.
    pub(crate) fn closing(&self) -> String {
        r#"</main>
<footer class="site-footer">Bookstand</footer>
</body>
</html>"#
            .to_string()
    }
}

/// CSS for the bookstore pages.
const BOOKSTORE_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #fafafa; color: #222; }
.site-header { display: flex; gap: 1rem; align-items: center; background: #222; color: white; padding: 0.75rem 1.5rem; }
.site-logo { color: white; font-weight: bold; text-decoration: none; }
.searchbar input { padding: 0.4rem 0.6rem; border-radius: 4px; border: none; }
.site-footer { padding: 1.5rem; text-align: center; color: #888; }
.page-container { max-width: 800px; margin: 0 auto; padding: 1.5rem; }

.book-list { display: flex; flex-direction: column; gap: 0.75rem; }
.book-item { display: flex; gap: 1rem; background: white; border-radius: 8px; padding: 1rem; text-decoration: none; color: inherit; }
.book-title { font-weight: bold; }
.book-subtitle, .book-author { color: #666; font-size: 0.9rem; }

.book-detail { background: white; border-radius: 8px; padding: 1.5rem; }
.cover-panel { display: flex; justify-content: center; background-size: cover; background-position: center; padding: 1rem; }
.book-description { margin-top: 1rem; line-height: 1.6; }

.review-editor form { display: flex; flex-direction: column; gap: 0.5rem; margin: 1rem 0; }
.review-editor textarea { min-height: 80px; padding: 0.5rem; }
.submit-row { display: flex; gap: 0.5rem; justify-content: flex-end; }
.review-item { background: white; border-radius: 8px; padding: 1rem; margin-bottom: 0.5rem; }
.review-author { font-weight: bold; }
.review-footer { display: flex; justify-content: space-between; color: #888; font-size: 0.85rem; }

.section-error { background: #fdecea; color: #b71c1c; border-radius: 8px; padding: 1rem; }
.error-boundary { text-align: center; padding: 2rem; }

.book-item--skeleton, .skeleton-line, .skeleton-cover { animation: pulse 1.2s ease-in-out infinite; }
.skeleton-cover { width: 100px; height: 100px; background: #e0e0e0; border-radius: 4px; }
.skeleton-line { height: 0.9rem; background: #e0e0e0; border-radius: 4px; margin: 0.4rem 0; width: 12rem; }
.skeleton-line--sub { width: 8rem; }
@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.4; } }
"#;
