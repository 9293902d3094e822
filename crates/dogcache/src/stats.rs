//! Cache statistics tracking

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for a [`CachingBreedFetcher`](crate::CachingBreedFetcher)
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    calls_made: AtomicU64,
    failures: AtomicU64,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup served from the cache
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a delegated call that succeeded
    pub fn record_call(&self) {
        self.calls_made.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a delegated call that failed
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Lookups served from the cache
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Successful delegated calls
    pub fn calls_made(&self) -> u64 {
        self.calls_made.load(Ordering::Relaxed)
    }

    /// Failed delegated calls (never cached)
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Share of lookups served from the cache (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.calls_made() + self.failures();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}
