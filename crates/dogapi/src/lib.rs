//! # dogapi
//!
//! Breed lookup sources.
//!
//! ## Sources
//! - **DogApiFetcher**: blocking HTTP client for the dog.ceo API
//! - **LocalFetcher**: in-memory fixture for tests and offline runs
//!
//! Both implement [`BreedFetcher`], the capability the cache layer wraps.

#![warn(missing_docs)]

mod error;
mod fetcher;
mod local;
mod remote;
mod response;

pub use error::{Error, Result};
pub use fetcher::BreedFetcher;
pub use local::LocalFetcher;
pub use remote::{DogApiConfig, DogApiFetcher, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use response::parse_sub_breeds;
