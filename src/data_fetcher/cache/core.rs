use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::types::{CacheCategory, CacheEntry};
use crate::clock::Clock;

/// Process-wide store of normalized results keyed by category + parameters.
///
/// Entries expire lazily: a stale entry is reported as absent but stays in the
/// map until the next successful fetch overwrites it. There is no capacity
/// bound and no single-flight collapsing; two concurrent misses on one key both
/// fetch upstream and the last write wins. The lock is held only for the map
/// operation itself, never across an upstream call.
#[derive(Debug)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    clock: Arc<dyn Clock>,
}

/// Snapshot of cache occupancy for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub fresh: usize,
}

impl ResponseCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Returns the stored value if it is still within its TTL
    #[instrument(skip(self))]
    pub async fn get(&self, key: &str) -> Option<Value> {
        let now = self.clock.now();
        let cache = self.entries.read().await;

        match cache.get(key) {
            Some(entry) if entry.is_fresh_at(now) => {
                debug!(
                    "Cache hit: key={}, age={:?}, ttl={}s",
                    key,
                    entry.age_at(now),
                    entry.ttl_seconds
                );
                Some(entry.value.clone())
            }
            Some(entry) => {
                debug!(
                    "Cache entry stale: key={}, age={:?}, ttl={}s",
                    key,
                    entry.age_at(now),
                    entry.ttl_seconds
                );
                None
            }
            None => {
                debug!("Cache miss: key={}", key);
                None
            }
        }
    }

    /// Inserts or overwrites the entry for `key` unconditionally
    #[instrument(skip(self, value))]
    pub async fn set(&self, key: &str, value: Value, ttl_seconds: u64) {
        let entry = CacheEntry::new(value, self.clock.now(), ttl_seconds);
        let mut cache = self.entries.write().await;
        let replaced = cache.insert(key.to_string(), entry).is_some();

        info!(
            "Cached response: key={}, ttl={}s, replaced={}",
            key, ttl_seconds, replaced
        );
    }

    /// Stores `value` with the TTL of its category
    pub async fn set_for(&self, category: CacheCategory, key: &str, value: Value) {
        self.set(key, value, category.ttl_seconds()).await;
    }

    pub async fn stats(&self) -> CacheStats {
        let now = self.clock.now();
        let cache = self.entries.read().await;
        CacheStats {
            entries: cache.len(),
            fresh: cache.values().filter(|e| e.is_fresh_at(now)).count(),
        }
    }
}
