//! Per-request cache policies.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cache policy attached to a read request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FetchCachePolicy {
    /// Never cached; every read hits the network.
    #[default]
    NoStore,
    /// Fetched once, reused until process restart or explicit invalidation.
    ForceCache,
    /// Entry expires after the given duration; later reads re-fetch.
    Revalidate { ttl: Duration },
    /// Entry is held until one of its tags is invalidated, regardless of
    /// elapsed time.
    Tagged { tags: Vec<String> },
}

impl FetchCachePolicy {
    /// Time-based revalidation policy.
    pub fn revalidate(ttl: Duration) -> Self {
        Self::Revalidate { ttl }
    }

    /// Tag-based policy with a single tag.
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self::Tagged {
            tags: vec![tag.into()],
        }
    }

    /// Tag-based policy with multiple tags.
    pub fn tagged_all(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Tagged {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if this policy allows storing a response at all.
    pub fn allows_caching(&self) -> bool {
        !matches!(self, Self::NoStore)
    }

    /// Tags carried by this policy.
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Tagged { tags } => tags,
            _ => &[],
        }
    }
}

/// Status of a cache lookup, for log output and response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    /// Fresh cache hit.
    Hit,
    /// No usable entry; caller must fetch.
    Miss,
    /// Entry present but invalidated or expired.
    Stale,
    /// Caching disabled for this request.
    Bypass,
}

impl std::fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hit => write!(f, "HIT"),
            Self::Miss => write!(f, "MISS"),
            Self::Stale => write!(f, "STALE"),
            Self::Bypass => write!(f, "BYPASS"),
        }
    }
}
