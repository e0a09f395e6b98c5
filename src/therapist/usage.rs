use std::num::NonZeroUsize;
use std::sync::Mutex;

use anyhow::{format_err, Result};
use lru::LruCache;

/// Per-identifier interaction counts. Least recently seen identifiers are evicted once
/// `capacity` is reached, so an evicted identifier starts counting from scratch.
pub struct UsageTracker {
    counts: Mutex<LruCache<String, u32>>,
}

impl UsageTracker {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        UsageTracker {
            counts: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Counts one more interaction and returns the updated total.
    pub fn record(&self, identifier: &str) -> Result<u32> {
        let mut counts = self
            .counts
            .lock()
            .map_err(|e| format_err!("Usage counter unavailable: {e}"))?;
        let count = match counts.get_mut(identifier) {
            Some(count) => {
                *count = count.saturating_add(1);
                *count
            }
            None => {
                counts.put(identifier.to_owned(), 1);
                1
            }
        };
        Ok(count)
    }

    #[cfg(test)]
    pub fn peek(&self, identifier: &str) -> Option<u32> {
        self.counts.lock().ok()?.peek(identifier).copied()
    }
}
