//! Cache entries with policy-driven freshness.

use std::time::Instant;

use crate::policy::FetchCachePolicy;

/// A cached response body.
///
/// Invalidation is a monotonic mark: once `stale` is set the entry is never
/// served again, though a later successful fetch may overwrite it.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Raw response body as received from the remote API.
    pub body: String,
    /// When the entry was stored.
    pub created_at: Instant,
    /// Policy the entry was stored under.
    pub policy: FetchCachePolicy,
    /// Set by tag invalidation; never cleared in place.
    pub stale: bool,
}

impl CacheEntry {
    /// Create a fresh entry.
    pub fn new(body: impl Into<String>, policy: FetchCachePolicy) -> Self {
        Self {
            body: body.into(),
            created_at: Instant::now(),
            policy,
            stale: false,
        }
    }

    /// Check whether the entry may still be served.
    pub fn is_fresh(&self) -> bool {
        if self.stale {
            return false;
        }
        match &self.policy {
            FetchCachePolicy::NoStore => false,
            FetchCachePolicy::ForceCache => true,
            FetchCachePolicy::Revalidate { ttl } => self.created_at.elapsed() <= *ttl,
            // Tagged entries live until invalidation, regardless of age.
            FetchCachePolicy::Tagged { .. } => true,
        }
    }

    /// Age of the entry.
    pub fn age(&self) -> std::time::Duration {
        self.created_at.elapsed()
    }
}
