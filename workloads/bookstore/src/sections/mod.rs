//! Section renderers for the bookstore pages.

mod book_detail;
mod book_list;
mod reviews;
mod skeleton;

pub use book_detail::*;
pub use book_list::*;
pub use reviews::*;
pub use skeleton::*;

/// HTML-escape untrusted text.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
