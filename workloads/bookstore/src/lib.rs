//! Bookstand: a streaming bookstore storefront.
//!
//! Pages render shell-first over a byte sink, streaming skeleton slots for
//! slow sections and swapping real content in as each fetch resolves. Reads
//! go through a cached fetch client with per-call policies; review mutations
//! invalidate the `review-{bookId}` cache tag so the next read re-fetches.

pub mod actions;
pub mod api;
pub mod data;
pub mod pages;
pub mod sections;

pub use actions::{create_review_action, delete_review_action, ActionResult, FormData};
pub use api::{review_tag, Bookstore, RANDOM_BOOKS_TTL};
pub use data::{Book, CreateReviewBody, Review};
pub use pages::{handle_book_detail, handle_home, handle_search};
