//! Sub-breed counting on top of any breed source

use dogapi::BreedFetcher;
use tracing::warn;

/// Number of sub-breeds of `breed`, or 0 if the lookup fails
///
/// An unknown breed is an expected answer and is not logged; any other
/// failure is reported before falling back to 0.
pub fn sub_breed_count<F: BreedFetcher + ?Sized>(breed: &str, fetcher: &F) -> usize {
    match fetcher.get_sub_breeds(breed) {
        Ok(sub_breeds) => sub_breeds.len(),
        Err(e) if e.is_not_found() => 0,
        Err(e) => {
            warn!("Lookup for {} failed: {}", breed, e);
            0
        }
    }
}
