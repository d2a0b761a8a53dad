//! Tag-invalidated fetch cache for the Bookstand platform.
//!
//! This crate provides:
//! - `FetchCachePolicy` - Per-request cache policy (no-store, force-cache,
//!   time-based revalidation, tag-based invalidation)
//! - `RequestSignature` - Cache key derived from method + URL
//! - `CacheStore` - Process-wide store with a tag index and `invalidate_tag`
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use shelf_cache::{CacheStore, FetchCachePolicy, RequestSignature};
//!
//! let store = CacheStore::new();
//! let sig = RequestSignature::get("http://api/review/book/1");
//! store.insert(sig.clone(), body, FetchCachePolicy::tagged("review-1")).await;
//!
//! // After a confirmed write:
//! store.invalidate_tag("review-1").await;
//! ```

mod entry;
mod policy;
mod signature;
mod store;

pub use entry::*;
pub use policy::*;
pub use signature::*;
pub use store::*;
