//! Data access layer for the Bookstand platform.
//!
//! `FetchClient` wraps a reqwest client around the shared `CacheStore`:
//! reads carry a `FetchCachePolicy` and are served from cache when a fresh
//! entry exists; writes (`post_json`, `delete`) always hit the network.
//! Non-success statuses surface as `FetchError` and are never cached, with
//! 404 distinguished so callers can render a not-found outcome.

mod client;
mod error;

pub use client::*;
pub use error::*;
