//! The breed lookup capability shared by every source

use std::sync::Arc;

use crate::error::Result;

/// Looks up the sub-breeds of a breed.
///
/// Implemented by the remote [`DogApiFetcher`](crate::DogApiFetcher), the
/// in-memory [`LocalFetcher`](crate::LocalFetcher) and by caching wrappers,
/// so any of them can stand in for another.
pub trait BreedFetcher {
    /// Return the sub-breed names of `breed`, in source order.
    ///
    /// Fails with [`Error::BreedNotFound`](crate::Error::BreedNotFound) when
    /// the breed is unknown. An empty list is a valid answer.
    fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>>;
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for &T {
    fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).get_sub_breeds(breed)
    }
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Box<T> {
    fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).get_sub_breeds(breed)
    }
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Arc<T> {
    fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).get_sub_breeds(breed)
    }
}
