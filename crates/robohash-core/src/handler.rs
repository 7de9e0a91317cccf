//! Request handling: URL building plus the two I/O wrappers (fetch, save).
//!
//! [`RoboHashClient`] is generic over its collaborators so tests can swap in
//! fakes for the network and filesystem. Each call makes exactly one fetch
//! attempt; nothing is cached between calls.

use std::path::Path;

use crate::config::RoboHashConfig;
use crate::error::{Result, RoboHashError};
use crate::fetch::{sniff_image_format, CurlFetcher, FetchBytes};
use crate::request::RequestConfig;
use crate::storage::{FileWriter, FsProbe, PathProbe, WriteBytes};
use crate::url_encoder;

#[derive(Debug, Clone, Default)]
pub struct RoboHashClient<F = CurlFetcher, W = FileWriter, P = FsProbe> {
    fetcher: F,
    writer: W,
    probe: P,
}

impl RoboHashClient {
    /// Client backed by libcurl and the local filesystem, with default timeouts.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: &RoboHashConfig) -> Self {
        Self::with_parts(CurlFetcher::from_config(cfg), FileWriter, FsProbe)
    }
}

impl<F, W, P> RoboHashClient<F, W, P>
where
    F: FetchBytes,
    W: WriteBytes,
    P: PathProbe,
{
    pub fn with_parts(fetcher: F, writer: W, probe: P) -> Self {
        Self {
            fetcher,
            writer,
            probe,
        }
    }

    pub fn build_request_url(&self, config: &RequestConfig) -> Result<String> {
        url_encoder::build_request_url(config)
    }

    /// Builds the URL for `config` and fetches it once.
    pub fn get_image_bytes(&self, config: &RequestConfig) -> Result<Vec<u8>> {
        let url = url_encoder::build_request_url(config)?;
        self.fetcher
            .fetch_bytes(&url)
            .map_err(|source| RoboHashError::Fetch { url, source })
    }

    /// Fetches the avatar for `config` and writes it to `dest`.
    ///
    /// `dest` must not exist yet. The format hint handed to the writer is the
    /// configured extension's suffix, whatever format the service returned.
    pub fn save_to_file(&self, config: &RequestConfig, dest: &Path) -> Result<()> {
        if self.probe.is_dir(dest) {
            return Err(RoboHashError::invalid(format!(
                "destination {} is a directory",
                dest.display()
            )));
        }
        if self.probe.exists(dest) {
            return Err(RoboHashError::invalid(format!(
                "destination {} already exists",
                dest.display()
            )));
        }

        let bytes = self.get_image_bytes(config)?;
        let hint = config.image_extension().suffix();
        if let Some(actual) = sniff_image_format(&bytes) {
            if !actual.matches_suffix(hint) {
                tracing::warn!(
                    requested = hint,
                    %actual,
                    "service returned a different image format than requested"
                );
            }
        }

        self.writer
            .write_bytes(&bytes, dest, hint)
            .map_err(|source| RoboHashError::Write {
                path: dest.to_path_buf(),
                source,
            })?;
        tracing::info!(path = %dest.display(), bytes = bytes.len(), "saved avatar");
        Ok(())
    }
}

/// [`RoboHashClient::get_image_bytes`] with the default client.
pub fn get_image_bytes(config: &RequestConfig) -> Result<Vec<u8>> {
    RoboHashClient::new().get_image_bytes(config)
}

/// [`RoboHashClient::save_to_file`] with the default client.
pub fn save_to_file(config: &RequestConfig, dest: &Path) -> Result<()> {
    RoboHashClient::new().save_to_file(config, dest)
}
