//! RequestConfig → RoboHash request URL.
//!
//! Output shape:
//!
//! ```text
//! https://robohash.org/<key>.<ext>?set=<v>|sets=<v1,v2,...>&bgset=<v>&size=<w>x<h>[&gravatar=yes|hashed][&ignoreext=false]
//! ```
//!
//! Parameter order is fixed. The image set parameter is always first (`?`),
//! everything after it uses `&`.

use crate::error::{Result, RoboHashError};
use crate::request::RequestConfig;
use crate::style::{ImageSet, UrlParameter};

pub const PROTOCOL: &str = "https";
pub const DOMAIN: &str = "robohash.org";

/// Separator between width and height in the `size` parameter.
const SIZE_SEPARATOR: char = 'x';

/// Builds the request URL for `config`. Pure; `config` is only read.
///
/// Fails with [`RoboHashError::Internal`] only if `config` somehow holds no image sets.
pub fn build_request_url(config: &RequestConfig) -> Result<String> {
    let mut url = format!("{}://{}/", PROTOCOL, DOMAIN);

    url.push_str(&key_segment(config)?);
    url.push_str(&image_sets_parameter(config.image_sets())?);
    url.push_str(&config.background_set().url_parameter(false));
    url.push_str(&size_parameter(config.width(), config.height()));
    if let Some(gravatar) = config.gravatar_mode().url_parameter(false) {
        url.push_str(&gravatar);
    }
    if !config.ignore_extension() {
        url.push_str(&UrlParameter::IgnoreExtension.encode("false", false));
    }

    tracing::debug!(%url, "built robohash request url");
    Ok(url)
}

/// Avatar key with the configured extension applied. Keys accepted in unsafe
/// mode are percent-encoded as one path segment.
fn key_segment(config: &RequestConfig) -> Result<String> {
    let key = config
        .image_extension()
        .set_as_extension(config.avatar_key());
    if config.unsafe_key_mode() {
        encode_path_segment(&key)
    } else {
        Ok(key)
    }
}

fn encode_path_segment(segment: &str) -> Result<String> {
    let mut base = url::Url::parse(&format!("{}://{}/", PROTOCOL, DOMAIN))
        .map_err(|e| RoboHashError::Internal(format!("service base url: {}", e)))?;
    base.path_segments_mut()
        .map_err(|_| RoboHashError::Internal("service base url cannot hold a path".into()))?
        .clear()
        .push(segment);
    Ok(base.path().trim_start_matches('/').to_string())
}

/// First query parameter: `?set=any` whenever `Any` is present, `?set=<v>` for
/// one concrete set, `?sets=<n1>,<n2>,...` for several (insertion order).
fn image_sets_parameter(sets: &[ImageSet]) -> Result<String> {
    if sets.contains(&ImageSet::Any) {
        return Ok(ImageSet::Any.url_parameter(true));
    }

    match sets {
        [] => Err(RoboHashError::Internal(
            "request has no image sets".to_string(),
        )),
        [single] => Ok(single.url_parameter(true)),
        many => {
            let list = many
                .iter()
                .filter_map(|s| s.list_value())
                .collect::<Vec<_>>()
                .join(",");
            Ok(UrlParameter::ImageSets.encode(&list, true))
        }
    }
}

fn size_parameter(width: u32, height: u32) -> String {
    UrlParameter::Size.encode(&format!("{}{}{}", width, SIZE_SEPARATOR, height), false)
}
