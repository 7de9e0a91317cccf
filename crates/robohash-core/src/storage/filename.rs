//! Local filename checks for saved avatars.

use crate::request::RequestConfig;

/// Characters rejected on either Windows or Unix filesystems.
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '\\', '|', '?', '*', '/', '\'', '"', '\0'];

/// True when `name` is non-empty and contains no character that is invalid in
/// a filename on common platforms.
pub fn is_valid_filename(name: &str) -> bool {
    !name.is_empty() && !name.contains(INVALID_FILENAME_CHARS)
}

/// Default local filename for a request: the avatar key with the configured
/// extension applied (`bob.png`). `None` if that is not a usable filename.
pub fn default_filename(config: &RequestConfig) -> Option<String> {
    let name = config
        .image_extension()
        .set_as_extension(config.avatar_key());
    let suffix = config.image_extension().with_period();
    let stem = name.strip_suffix(suffix.as_str()).unwrap_or(&name);
    if stem.trim_matches('.').trim().is_empty() || !is_valid_filename(&name) {
        return None;
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ImageExtension;

    #[test]
    fn valid_filenames() {
        assert!(is_valid_filename("avatar.png"));
        assert!(is_valid_filename("with space.jpg"));
    }

    #[test]
    fn invalid_filenames() {
        assert!(!is_valid_filename(""));
        for bad in ["a<b", "a>b", "c:d", "a\\b", "a|b", "a?b", "a*b", "a/b", "it's", "\"q\"", "nul\0"] {
            assert!(!is_valid_filename(bad), "{:?} should be invalid", bad);
        }
    }

    #[test]
    fn default_filename_applies_extension() {
        let mut c = RequestConfig::new("robot.old").unwrap();
        c.set_image_extension(ImageExtension::Jpg);
        assert_eq!(default_filename(&c).as_deref(), Some("robot.jpg"));
    }

    #[test]
    fn default_filename_rejects_unusable_keys() {
        let c = RequestConfig::new_unsafe("a/b").unwrap();
        assert_eq!(default_filename(&c), None);
        let c = RequestConfig::new(".hidden").unwrap();
        assert_eq!(default_filename(&c), None);
    }
}
