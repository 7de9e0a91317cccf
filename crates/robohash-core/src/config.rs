use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::request::RequestConfig;
use crate::style::{BackgroundSet, GravatarMode, ImageExtension, ImageSet};

/// Request defaults applied to every new [`RequestConfig`] before per-call overrides
/// (optional `[defaults]` section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_sets: Option<Vec<ImageSet>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_set: Option<BackgroundSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<ImageExtension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravatar: Option<GravatarMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_extension: Option<bool>,
}

impl RequestDefaults {
    /// Applies every present field to `config`. An empty `image_sets` list is ignored.
    pub fn apply(&self, config: &mut RequestConfig) -> crate::Result<()> {
        if let Some(sets) = self.image_sets.as_deref().filter(|s| !s.is_empty()) {
            config.set_image_sets(sets)?;
        }
        if let Some(bg) = self.background_set {
            config.set_background_set(bg);
        }
        if let Some(ext) = self.extension {
            config.set_image_extension(ext);
        }
        if let Some(w) = self.width {
            config.set_width(to_dimension("width", w)?)?;
        }
        if let Some(h) = self.height {
            config.set_height(to_dimension("height", h)?)?;
        }
        if let Some(mode) = self.gravatar {
            config.set_gravatar_mode(mode);
        }
        if let Some(ignore) = self.ignore_extension {
            config.set_ignore_extension(ignore);
        }
        Ok(())
    }
}

fn to_dimension(name: &str, value: u32) -> crate::Result<i32> {
    i32::try_from(value).map_err(|_| {
        crate::RoboHashError::InvalidArgument(format!("{} {} is too large", name, value))
    })
}

/// Global configuration loaded from `~/.config/robohash/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoboHashConfig {
    /// Seconds allowed for the TCP/TLS connect.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole fetch.
    pub timeout_secs: u64,
    /// Fetches with a larger body fail.
    pub max_image_bytes: u64,
    /// Optional User-Agent header for fetches.
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub defaults: RequestDefaults,
}

impl Default for RoboHashConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_image_bytes: 8 * 1024 * 1024,
            user_agent: None,
            defaults: RequestDefaults::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("robohash")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RoboHashConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RoboHashConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RoboHashConfig = toml::from_str(&data)?;
    Ok(cfg)
}
