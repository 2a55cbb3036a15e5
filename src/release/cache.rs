//! Per-key memoizing image cache
//!
//! Maps `image@release` keys to a pull-spec resolved at most once per key.
//! Each entry pairs its own async lock with a write-once cell, so callers
//! asking for the same key share one computation while unrelated keys never
//! wait on each other.
//!
//! | Step | Lock held | Description |
//! |------|-----------|-------------|
//! | Fast path | none | Cell already populated, value returned |
//! | Slow path | entry | Re-check, then compute and populate |
//!
//! Entries are never evicted. A failed or empty computation leaves the cell
//! empty, so the next caller computes again.

use crate::error::{ReleaseError, ReleaseResult};
use dashmap::DashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};
use tracing::debug;

/// Key for an image lookup: `<image name>@<release pull-spec>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Create a key for `image_name` inside `release_image`
    pub fn new(image_name: &str, release_image: &str) -> Self {
        Self(format!("{}@{}", image_name, release_image))
    }

    /// The composite key string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Default)]
struct CacheEntry {
    value: OnceCell<String>,
    lock: Mutex<()>,
}

/// Concurrent single-flight cache of resolved image pull-specs
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: DashMap<CacheKey, Arc<CacheEntry>>,
}

impl ImageCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys ever referenced, resolved or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been referenced yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Peek at a resolved value without computing it
    pub fn get(&self, key: &CacheKey) -> Option<String> {
        self.entries
            .get(key)
            .and_then(|entry| entry.value.get().cloned())
    }

    /// Return the value for `key`, running `compute` if it is not resolved yet
    ///
    /// Concurrent callers for one key queue on that key's lock; whoever gets
    /// it first computes, everyone after observes the stored value.
    pub async fn resolve<F, Fut>(&self, key: &CacheKey, compute: F) -> ReleaseResult<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ReleaseResult<String>>,
    {
        // Clone the entry out so no map shard stays locked across an await.
        let entry = Arc::clone(&self.entries.entry(key.clone()).or_default());

        if let Some(value) = entry.value.get() {
            return Ok(value.clone());
        }

        let _guard = entry.lock.lock().await;
        if let Some(value) = entry.value.get() {
            debug!(key = %key, "Image resolved by a concurrent caller");
            return Ok(value.clone());
        }

        let value = compute().await?;
        if !value.is_empty() {
            entry.value.set(value.clone()).map_err(|_| {
                ReleaseError::Internal(format!(
                    "cache entry for {} was populated outside its lock",
                    key
                ))
            })?;
        }

        Ok(value)
    }
}
