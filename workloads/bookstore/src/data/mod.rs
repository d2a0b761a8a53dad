//! Data models for the bookstore.

mod book;
mod review;

pub use book::*;
pub use review::*;
