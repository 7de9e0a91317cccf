//! Error taxonomy for request building and image retrieval.

use std::path::PathBuf;

use crate::fetch::FetchError;
use crate::storage::WriteError;

/// Errors surfaced by the public API. Nothing is retried or logged-and-dropped;
/// every failure goes straight back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum RoboHashError {
    /// Caller supplied an unusable value (empty key, negative size, existing path, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The image could not be retrieved from the remote service.
    #[error("failed to fetch image from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The retrieved image could not be written to local storage.
    #[error("failed to write image to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteError,
    },

    /// A request invariant was broken; indicates a defect rather than bad input.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RoboHashError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RoboHashError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, RoboHashError>;
