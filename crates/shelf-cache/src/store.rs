//! Process-wide cache store with a tag index.

use std::collections::{HashMap, HashSet};

use tokio::sync::RwLock;
use tracing::debug;

use crate::entry::CacheEntry;
use crate::policy::{CacheStatus, FetchCachePolicy};
use crate::signature::RequestSignature;

/// Result of a cache lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    /// Usable entry; the cached body.
    Hit(String),
    /// Entry present but expired or invalidated; the caller must re-fetch.
    Stale,
    /// No entry; the caller must fetch.
    Miss,
}

impl CacheLookup {
    /// Status for log output.
    pub fn status(&self) -> CacheStatus {
        match self {
            Self::Hit(_) => CacheStatus::Hit,
            Self::Stale => CacheStatus::Stale,
            Self::Miss => CacheStatus::Miss,
        }
    }
}

struct StoreInner {
    entries: HashMap<RequestSignature, CacheEntry>,
    /// Tag -> signatures of entries carrying it.
    tags: HashMap<String, HashSet<RequestSignature>>,
}

/// Shared fetch cache.
///
/// Readers populate entries on first read; the only other mutator is
/// `invalidate_tag`, triggered by a confirmed write. Invalidation marks
/// entries stale rather than removing them, so a concurrent reader sees
/// either the old body or the stale mark, never a partial state.
pub struct CacheStore {
    inner: RwLock<StoreInner>,
}

impl CacheStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                entries: HashMap::new(),
                tags: HashMap::new(),
            }),
        }
    }

    /// Look up a signature, honoring the entry's freshness rules.
    pub async fn lookup(&self, signature: &RequestSignature) -> CacheLookup {
        let inner = self.inner.read().await;
        match inner.entries.get(signature) {
            Some(entry) if entry.is_fresh() => CacheLookup::Hit(entry.body.clone()),
            Some(_) => CacheLookup::Stale,
            None => CacheLookup::Miss,
        }
    }

    /// Store a response body under a signature.
    ///
    /// `NoStore` policies are a no-op. Tagged policies register the entry in
    /// the tag index. An existing entry (stale or not) is overwritten.
    pub async fn insert(
        &self,
        signature: RequestSignature,
        body: impl Into<String>,
        policy: FetchCachePolicy,
    ) {
        if !policy.allows_caching() {
            return;
        }

        let mut inner = self.inner.write().await;
        for tag in policy.tags() {
            inner
                .tags
                .entry(tag.clone())
                .or_default()
                .insert(signature.clone());
        }
        debug!(signature = %signature, "cache insert");
        inner
            .entries
            .insert(signature, CacheEntry::new(body, policy));
    }

    /// Mark every entry carrying `tag` as stale. Returns the number of
    /// entries affected.
    pub async fn invalidate_tag(&self, tag: &str) -> u64 {
        let mut inner = self.inner.write().await;
        let signatures: Vec<RequestSignature> = inner
            .tags
            .get(tag)
            .map(|s| s.iter().cloned().collect())
            .unwrap_or_default();

        let mut count = 0;
        for signature in signatures {
            if let Some(entry) = inner.entries.get_mut(&signature) {
                if !entry.stale {
                    entry.stale = true;
                    count += 1;
                }
            }
        }
        debug!(tag, count, "cache tag invalidated");
        count
    }

    /// Number of live (non-stale) entries. For diagnostics and tests.
    pub async fn len(&self) -> usize {
        let inner = self.inner.read().await;
        inner.entries.values().filter(|e| !e.stale).count()
    }

    /// Check if the store holds no live entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}
