//! Request options shared by the `url` and `save` commands.

use anyhow::{Context, Result};
use clap::Args;
use robohash_core::config::RequestDefaults;
use robohash_core::{BackgroundSet, GravatarMode, ImageExtension, ImageSet, RequestConfig};

#[derive(Debug, Clone, Args)]
pub struct RequestArgs {
    /// Avatar key (any text; the same key always yields the same avatar).
    pub key: String,

    /// Image set to allow; repeat for several (e.g. --set monsters --set humans).
    #[arg(long = "set", value_name = "SET")]
    pub sets: Vec<ImageSet>,

    /// Background set.
    #[arg(long, value_name = "BG")]
    pub bg: Option<BackgroundSet>,

    /// Image extension appended to the key.
    #[arg(long, value_name = "EXT")]
    pub ext: Option<ImageExtension>,

    /// Size as WIDTHxHEIGHT, e.g. 600x600.
    #[arg(long, value_parser = parse_size, conflicts_with_all = ["width", "height"])]
    pub size: Option<(i32, i32)>,

    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i32>,

    /// Treat the key as an email for a Gravatar lookup (yes) or as its MD5 hash (hashed).
    #[arg(long, value_name = "MODE")]
    pub gravatar: Option<GravatarMode>,

    /// Let the key's extension influence the generated avatar.
    #[arg(long)]
    pub keep_ext_in_hash: bool,

    /// Accept keys with characters outside [A-Za-z0-9._~-]; they are percent-encoded.
    #[arg(long)]
    pub unsafe_key: bool,
}

impl RequestArgs {
    /// Builds the request: config-file defaults first, then command-line overrides.
    pub fn to_request(&self, defaults: &RequestDefaults) -> Result<RequestConfig> {
        let mut config = RequestConfig::create(self.key.as_str(), self.unsafe_key)
            .context("invalid avatar key")?;
        defaults
            .apply(&mut config)
            .context("invalid [defaults] in config file")?;

        if !self.sets.is_empty() {
            config.set_image_sets(&self.sets)?;
        }
        if let Some(bg) = self.bg {
            config.set_background_set(bg);
        }
        if let Some(ext) = self.ext {
            config.set_image_extension(ext);
        }
        if let Some((w, h)) = self.size {
            config.set_size(w, h)?;
        }
        if let Some(w) = self.width {
            config.set_width(w)?;
        }
        if let Some(h) = self.height {
            config.set_height(h)?;
        }
        if let Some(mode) = self.gravatar {
            config.set_gravatar_mode(mode);
        }
        if self.keep_ext_in_hash {
            config.set_ignore_extension(false);
        }
        Ok(config)
    }
}

/// Parses `WIDTHxHEIGHT` (case-insensitive separator).
pub fn parse_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{}`", s))?;
    let w = w.trim().parse::<i32>().map_err(|e| format!("width: {}", e))?;
    let h = h.trim().parse::<i32>().map_err(|e| format!("height: {}", e))?;
    Ok((w, h))
}
