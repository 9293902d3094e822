//! Error types for dogapi

use std::fmt;

/// Result type alias for breed lookups
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for breed lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source does not know the breed
    BreedNotFound(String),

    /// Transport or HTTP status failure talking to a remote source
    Request(String),

    /// Response body did not have the expected shape
    Decode(String),
}

impl Error {
    /// True for [`Error::BreedNotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::BreedNotFound(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BreedNotFound(breed) => write!(f, "Breed not found: {}", breed),
            Error::Request(msg) => write!(f, "Request failed: {}", msg),
            Error::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Request(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}
