//! In-memory TTL cache for resolved content.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

/// A cached value and its fixed expiry instant.
///
/// Entries are replaced, never mutated; expiry is set once at insert.
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Process-local key-value cache with per-entry expiry.
///
/// An entry is visible to readers only while its TTL has not elapsed;
/// physical removal happens in [`TtlCache::purge_expired`], which the
/// background sweeper calls periodically. Reads and writes are synchronous
/// and never suspend, so the cache can sit on any request path.
///
/// Timestamps use [`tokio::time::Instant`]; tests running on a paused
/// runtime clock drive expiry deterministically.
pub struct TtlCache<T> {
    name: &'static str,
    default_ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
}

impl<T: Clone + Send + Sync + 'static> TtlCache<T> {
    /// Creates an empty cache. `name` labels this instance in log lines.
    pub fn new(name: &'static str, default_ttl: Duration) -> Self {
        Self {
            name,
            default_ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the live value for `key`, or `None` when absent or expired.
    ///
    /// Expired entries stay in the map until the next sweep but are never
    /// returned.
    pub fn get(&self, key: &str) -> Option<T> {
        // A poisoned lock yields its inner state; every entry is
        // replaceable, so stale reads are harmless.
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        match entries.get(key) {
            Some(entry) if !entry.is_expired(Instant::now()) => {
                debug!("Cache HIT ({}): {}", self.name, key);
                Some(entry.value.clone())
            }
            Some(_) => {
                debug!("Cache EXPIRED ({}): {}", self.name, key);
                None
            }
            None => {
                debug!("Cache MISS ({}): {}", self.name, key);
                None
            }
        }
    }

    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// `ttl` overrides the cache default when given.
    pub fn insert(&self, key: &str, value: T, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), entry);
        debug!("Cache SET ({}): {} (TTL: {}s)", self.name, key, ttl.as_secs());
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.values().filter(|e| !e.is_expired(now)).count()
    }

    /// Returns true when no live entries exist.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops expired entries, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    /// Spawns the periodic sweep task for this cache.
    ///
    /// The task runs for the process lifetime; the returned handle exists
    /// for tests and is otherwise dropped.
    pub fn spawn_sweeper(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // An interval's first tick completes immediately; consume it so
            // sweeps start one full period after spawn.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let removed = cache.purge_expired();
                if removed > 0 {
                    debug!(
                        "Cache SWEEP ({}): removed {} expired entries",
                        cache.name, removed
                    );
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_get() {
        let cache = TtlCache::new("test", Duration::from_secs(300));
        cache.insert("news_list", "payload".to_string(), None);

        assert_eq!(cache.get("news_list"), Some("payload".to_string()));
    }

    #[tokio::test]
    async fn test_get_absent_key() {
        let cache: TtlCache<String> = TtlCache::new("test", Duration::from_secs(300));

        assert_eq!(cache.get("missing"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_absent_after_ttl() {
        let cache = TtlCache::new("test", Duration::from_secs(300));
        cache.insert("news_list", "payload".to_string(), None);

        tokio::time::advance(Duration::from_secs(301)).await;

        assert_eq!(cache.get("news_list"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_live_just_before_ttl() {
        let cache = TtlCache::new("test", Duration::from_secs(300));
        cache.insert("news_list", "payload".to_string(), None);

        tokio::time::advance(Duration::from_secs(299)).await;

        assert_eq!(cache.get("news_list"), Some("payload".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_per_insert_ttl_overrides_default() {
        let cache = TtlCache::new("test", Duration::from_secs(300));
        cache.insert("short", 1u32, Some(Duration::from_secs(10)));
        cache.insert("long", 2u32, None);

        tokio::time::advance(Duration::from_secs(11)).await;

        assert_eq!(cache.get("short"), None);
        assert_eq!(cache.get("long"), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_replace_resets_expiry() {
        let cache = TtlCache::new("test", Duration::from_secs(300));
        cache.insert("key", "old".to_string(), None);

        tokio::time::advance(Duration::from_secs(200)).await;
        cache.insert("key", "new".to_string(), None);
        tokio::time::advance(Duration::from_secs(200)).await;

        // 400s after the first insert, 200s after the replacement.
        assert_eq!(cache.get("key"), Some("new".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_len_counts_only_live_entries() {
        let cache = TtlCache::new("test", Duration::from_secs(300));
        cache.insert("a", 1u32, Some(Duration::from_secs(10)));
        cache.insert("b", 2u32, None);

        assert_eq!(cache.len(), 2);

        tokio::time::advance(Duration::from_secs(11)).await;

        assert_eq!(cache.len(), 1);
        assert!(!cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_removes_only_expired() {
        let cache = TtlCache::new("test", Duration::from_secs(300));
        cache.insert("a", 1u32, Some(Duration::from_secs(10)));
        cache.insert("b", 2u32, None);

        tokio::time::advance(Duration::from_secs(11)).await;

        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.get("b"), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_on_empty_cache() {
        let cache: TtlCache<u32> = TtlCache::new("test", Duration::from_secs(300));

        assert_eq!(cache.purge_expired(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_reclaims_expired_entries() {
        let cache = Arc::new(TtlCache::new("test", Duration::from_secs(1)));
        let _task = cache.spawn_sweeper(Duration::from_secs(60));
        tokio::task::yield_now().await;

        cache.insert("a", 1u32, None);
        cache.insert("b", 2u32, None);

        // The paused clock auto-advances through the sweeper's first tick.
        tokio::time::sleep(Duration::from_secs(61)).await;

        assert_eq!(cache.purge_expired(), 0);
        assert_eq!(cache.len(), 0);
    }
}
