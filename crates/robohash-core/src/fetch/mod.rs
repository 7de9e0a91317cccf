//! Retrieving image bytes for a request URL.
//!
//! [`FetchBytes`] is the seam the handler calls through; [`CurlFetcher`] is the
//! libcurl-backed implementation. One attempt per call, no retry.

mod error;
mod sniff;

pub use error::FetchError;
pub use sniff::{sniff_image_format, SniffedFormat};

use std::time::Duration;

use crate::config::RoboHashConfig;

/// Fetches the body at `url`.
pub trait FetchBytes {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: FetchBytes + ?Sized> FetchBytes for &F {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch_bytes(url)
    }
}

/// Blocking GET via libcurl. Follows redirects, rejects non-2xx responses,
/// oversized or empty bodies, and bodies that are not an image.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    timeout: Duration,
    max_bytes: u64,
    user_agent: Option<String>,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::from_config(&RoboHashConfig::default())
    }
}

impl CurlFetcher {
    pub fn from_config(cfg: &RoboHashConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_bytes: cfg.max_image_bytes,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl FetchBytes for CurlFetcher {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body: Vec<u8> = Vec::new();
        let max_bytes = self.max_bytes;
        let mut too_large = false;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                if body.len() as u64 + data.len() as u64 > max_bytes {
                    too_large = true;
                    return Ok(0); // abort transfer
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            let performed = transfer.perform();
            drop(transfer);
            if too_large {
                return Err(FetchError::TooLarge { limit: max_bytes });
            }
            performed?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        if body.is_empty() {
            return Err(FetchError::Empty);
        }
        let format = sniff_image_format(&body).ok_or(FetchError::NotAnImage)?;
        tracing::debug!(%url, bytes = body.len(), %format, "fetched image");
        Ok(body)
    }
}
