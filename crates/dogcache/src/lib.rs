//! # dogcache
//!
//! Memoizing cache layer for breed lookups.
//!
//! ## Architecture
//! - **HashMap**: AHash keyed by breed name, guarded by a mutex
//! - **Stats**: atomic hit / call / failure counters
//! - **Integration**: wraps any `dogapi::BreedFetcher` and is one itself
//!
//! Successful lookups are kept for the lifetime of the wrapper; failures are
//! passed through and never stored.

#![warn(missing_docs)]

mod cache;
mod stats;

pub use cache::CachingBreedFetcher;
pub use stats::CacheStats;
