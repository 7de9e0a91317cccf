use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{parse_variant, ParseStyleError};

/// Image format suffix appended to the avatar key.
///
/// The service uses it as a format hint only; callers should not assume the
/// returned bytes are in this format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageExtension {
    Jpg,
    Jpeg,
    #[default]
    Png,
    /// Slower for the service to render than the others.
    Bitmap,
}

impl ImageExtension {
    pub const ALL: [ImageExtension; 4] = [
        ImageExtension::Jpg,
        ImageExtension::Jpeg,
        ImageExtension::Png,
        ImageExtension::Bitmap,
    ];

    /// Lowercase suffix without a period, e.g. `bmp`.
    pub fn suffix(self) -> &'static str {
        match self {
            ImageExtension::Jpg => "jpg",
            ImageExtension::Jpeg => "jpeg",
            ImageExtension::Png => "png",
            ImageExtension::Bitmap => "bmp",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ImageExtension::Jpg => "jpg",
            ImageExtension::Jpeg => "jpeg",
            ImageExtension::Png => "png",
            ImageExtension::Bitmap => "bitmap",
        }
    }

    pub fn with_period(self) -> String {
        format!(".{}", self.suffix())
    }

    /// `prefix` followed by `.suffix`.
    pub fn add_as_suffix(self, prefix: &str) -> String {
        format!("{}{}", prefix, self.with_period())
    }

    /// Replaces everything from the last period of `key` onward with this
    /// extension, or appends it when `key` has no period.
    ///
    /// `"my-image.loop.something"` becomes `"my-image.loop.png"` for [`ImageExtension::Png`].
    pub fn set_as_extension(self, key: &str) -> String {
        match key.rfind('.') {
            Some(idx) => self.add_as_suffix(&key[..idx]),
            None => self.add_as_suffix(key),
        }
    }
}

impl fmt::Display for ImageExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for ImageExtension {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('.');
        parse_variant("image extension", s, &Self::ALL, |v| [v.name(), v.suffix()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes() {
        assert_eq!(ImageExtension::Jpg.suffix(), "jpg");
        assert_eq!(ImageExtension::Jpeg.suffix(), "jpeg");
        assert_eq!(ImageExtension::Png.suffix(), "png");
        assert_eq!(ImageExtension::Bitmap.suffix(), "bmp");
        assert_eq!(ImageExtension::Bitmap.with_period(), ".bmp");
        assert_eq!(ImageExtension::Jpg.add_as_suffix("BartSimpson"), "BartSimpson.jpg");
    }

    #[test]
    fn set_as_extension_appends_without_period() {
        assert_eq!(ImageExtension::Png.set_as_extension("minimal"), "minimal.png");
    }

    #[test]
    fn set_as_extension_splits_at_last_period() {
        assert_eq!(
            ImageExtension::Png.set_as_extension("my-image.loop.something"),
            "my-image.loop.png"
        );
        assert_eq!(ImageExtension::Jpeg.set_as_extension("photo.png"), "photo.jpeg");
        assert_eq!(ImageExtension::Jpg.set_as_extension("trailing.."), "trailing..jpg");
        assert_eq!(ImageExtension::Bitmap.set_as_extension(".hidden"), ".bmp");
    }

    #[test]
    fn parse() {
        assert_eq!("bmp".parse::<ImageExtension>().unwrap(), ImageExtension::Bitmap);
        assert_eq!("BITMAP".parse::<ImageExtension>().unwrap(), ImageExtension::Bitmap);
        assert_eq!(".jpeg".parse::<ImageExtension>().unwrap(), ImageExtension::Jpeg);
        assert!("gif".parse::<ImageExtension>().is_err());
    }
}
