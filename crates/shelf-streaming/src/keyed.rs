//! Latest-query-wins guard for keyed sections.
//!
//! A section driven by a variable input (e.g. a search query) must restart
//! when its key changes: results from a superseded in-flight render must
//! never replace a newer query's intent.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Token handed out when a keyed render begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyToken {
    key: String,
    generation: u64,
}

impl KeyToken {
    /// The key this render was started with.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Generation-counted guard over a section's key.
///
/// `begin` supersedes all outstanding tokens; `commit` accepts a result
/// only if its token is still current.
pub struct SectionKey {
    generation: AtomicU64,
    current: Mutex<String>,
}

impl SectionKey {
    /// Create a guard with no key set.
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            current: Mutex::new(String::new()),
        }
    }

    /// Start a render for `key`, superseding any in-flight render.
    pub fn begin(&self, key: impl Into<String>) -> KeyToken {
        let key = key.into();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut current) = self.current.lock() {
            *current = key.clone();
        }
        KeyToken { key, generation }
    }

    /// Check whether a token still represents the latest render.
    pub fn is_current(&self, token: &KeyToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.generation
    }

    /// Accept a render result only if the token is still current.
    ///
    /// Returns `None` for superseded tokens; the caller must discard the
    /// result without displaying it.
    pub fn commit(&self, token: &KeyToken, html: String) -> Option<String> {
        if self.is_current(token) {
            Some(html)
        } else {
            None
        }
    }
}

impl Default for SectionKey {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_accepts_current_token() {
        let key = SectionKey::new();
        let token = key.begin("rust");
        assert_eq!(
            key.commit(&token, "<div>rust</div>".to_string()),
            Some("<div>rust</div>".to_string())
        );
    }

    #[test]
    fn test_new_key_supersedes_in_flight_render() {
        let key = SectionKey::new();
        let old = key.begin("rust");
        let new = key.begin("go");

        // The old query resolves late; its result must be discarded.
        assert!(key.commit(&old, "<div>rust</div>".to_string()).is_none());
        assert_eq!(
            key.commit(&new, "<div>go</div>".to_string()),
            Some("<div>go</div>".to_string())
        );
    }

    #[test]
    fn test_same_key_still_supersedes_previous_token() {
        // Re-submitting the same query restarts the section.
        let key = SectionKey::new();
        let first = key.begin("rust");
        let second = key.begin("rust");
        assert!(!key.is_current(&first));
        assert!(key.is_current(&second));
    }

    #[tokio::test]
    async fn test_interleaved_async_renders_latest_wins() {
        use std::sync::Arc;
        use std::time::Duration;

        let key = Arc::new(SectionKey::new());

        let slow = {
            let key = Arc::clone(&key);
            let token = key.begin("old");
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                key.commit(&token, "old results".to_string())
            })
        };

        tokio::time::sleep(Duration::from_millis(5)).await;
        let token = key.begin("new");
        let committed = key.commit(&token, "new results".to_string());

        assert_eq!(committed, Some("new results".to_string()));
        assert!(slow.await.unwrap().is_none());
    }
}
