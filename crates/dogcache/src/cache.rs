//! CachingBreedFetcher: memoizing wrapper around any BreedFetcher

use std::collections::HashMap;

use ahash::RandomState;
use dogapi::{BreedFetcher, Result};
use parking_lot::Mutex;
use tracing::debug;

use crate::stats::CacheStats;

/// [`BreedFetcher`] that remembers successful lookups of the wrapped source
///
/// Failed lookups are never stored, so asking again for an unknown breed
/// always reaches the source. Stored entries are never replaced or evicted.
///
/// The memo lock is held across the delegated call, so concurrent lookups
/// of an uncached breed reach the source once. Every lookup is serialized
/// behind it: while a slow source call is in flight, hits for other breeds
/// and `contains` / `len` / `is_empty` wait for it too.
pub struct CachingBreedFetcher<F> {
    /// Wrapped source
    fetcher: F,

    /// breed -> sub-breeds
    cache: Mutex<HashMap<String, Vec<String>, RandomState>>,

    /// Cache statistics
    stats: CacheStats,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Wrap `fetcher` with an empty cache
    ///
    /// # Arguments
    /// * `fetcher` - Source to delegate cache misses to
    ///
    /// # Returns
    /// * `CachingBreedFetcher<F>` - Cache with no entries and zeroed stats
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: Mutex::new(HashMap::with_hasher(RandomState::new())),
            stats: CacheStats::new(),
        }
    }

    /// Number of successful delegated calls so far
    pub fn calls_made(&self) -> u64 {
        self.stats.calls_made()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Check whether `breed` is cached
    ///
    /// # Arguments
    /// * `breed` - Breed name, case-sensitive
    pub fn contains(&self, breed: &str) -> bool {
        self.cache.lock().contains_key(breed)
    }

    /// Number of cached breeds
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Borrow the wrapped source
    pub fn inner(&self) -> &F {
        &self.fetcher
    }

    /// Drop the cache and return the wrapped source
    ///
    /// # Returns
    /// * `F` - The source passed to [`CachingBreedFetcher::new`]
    pub fn into_inner(self) -> F {
        self.fetcher
    }
}

impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    /// Get sub-breeds from the cache or the wrapped source
    ///
    /// # Arguments
    /// * `breed` - Breed name, passed to the source unchanged on a miss
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - Cached or freshly fetched sub-breeds; source
    ///   errors are returned as-is and nothing is stored
    fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let mut cache = self.cache.lock();

        if let Some(sub_breeds) = cache.get(breed) {
            self.stats.record_hit();
            debug!(breed, "cache hit");
            return Ok(sub_breeds.clone());
        }

        match self.fetcher.get_sub_breeds(breed) {
            Ok(sub_breeds) => {
                self.stats.record_call();
                debug!(breed, count = sub_breeds.len(), "cached sub-breeds");
                cache.insert(breed.to_string(), sub_breeds.clone());
                Ok(sub_breeds)
            }
            Err(e) => {
                self.stats.record_failure();
                debug!(breed, error = %e, "lookup failed, not cached");
                Err(e)
            }
        }
    }
}
