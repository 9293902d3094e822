//! In-memory breed source for tests and offline runs

use std::collections::HashMap;

use tracing::trace;

use crate::error::{Error, Result};
use crate::fetcher::BreedFetcher;

/// Sub-breeds of "hound" as served by dog.ceo
const HOUND_SUB_BREEDS: [&str; 7] = [
    "afghan", "basset", "blood", "english", "ibizan", "plott", "walker",
];

/// Fixture-backed [`BreedFetcher`]
///
/// `LocalFetcher::new()` knows no breeds; `Default` knows "hound".
#[derive(Debug, Clone)]
pub struct LocalFetcher {
    breeds: HashMap<String, Vec<String>>,
}

impl LocalFetcher {
    /// Create an empty fixture
    pub fn new() -> Self {
        Self {
            breeds: HashMap::new(),
        }
    }

    /// Register `breed` with the given sub-breeds, replacing any previous entry
    ///
    /// # Arguments
    /// * `breed` - Breed name, matched case-sensitively
    /// * `sub_breeds` - Sub-breed names in the order lookups return them
    ///
    /// # Returns
    /// * `LocalFetcher` - The fixture with the breed added
    pub fn with_breed<I, S>(mut self, breed: impl Into<String>, sub_breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breeds
            .insert(breed.into(), sub_breeds.into_iter().map(Into::into).collect());
        self
    }

    /// Number of known breeds
    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    /// Check if the fixture knows no breeds
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

impl Default for LocalFetcher {
    fn default() -> Self {
        Self::new().with_breed("hound", HOUND_SUB_BREEDS)
    }
}

impl BreedFetcher for LocalFetcher {
    fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        trace!(breed, "local lookup");
        self.breeds
            .get(breed)
            .cloned()
            .ok_or_else(|| Error::BreedNotFound(breed.to_string()))
    }
}
