//! Fetch collaborator error type.

use std::fmt;

/// Why a single image fetch failed. Not retried by this crate.
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (bad URL, timeout, connection, ...).
    Curl(curl::Error),
    /// Response had a non-2xx status.
    Http(u32),
    /// Response body was larger than the configured limit.
    TooLarge { limit: u64 },
    /// Response body was empty.
    Empty,
    /// Response body is not a recognised image payload.
    NotAnImage,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::TooLarge { limit } => write!(f, "response exceeds {} bytes", limit),
            FetchError::Empty => write!(f, "empty response body"),
            FetchError::NotAnImage => write!(f, "response is not an image"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Http(_)
            | FetchError::TooLarge { .. }
            | FetchError::Empty
            | FetchError::NotAnImage => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}
