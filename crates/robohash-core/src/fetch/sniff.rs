//! Image format detection from leading magic bytes.

use std::fmt;

/// Container formats the service is known to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SniffedFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
}

impl SniffedFormat {
    /// True when a file saved with `suffix` (e.g. `jpg`) would match this payload.
    pub fn matches_suffix(self, suffix: &str) -> bool {
        match self {
            SniffedFormat::Png => suffix.eq_ignore_ascii_case("png"),
            SniffedFormat::Jpeg => {
                suffix.eq_ignore_ascii_case("jpg") || suffix.eq_ignore_ascii_case("jpeg")
            }
            SniffedFormat::Bmp => suffix.eq_ignore_ascii_case("bmp"),
            SniffedFormat::Gif => suffix.eq_ignore_ascii_case("gif"),
        }
    }
}

impl fmt::Display for SniffedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SniffedFormat::Png => "png",
            SniffedFormat::Jpeg => "jpeg",
            SniffedFormat::Bmp => "bmp",
            SniffedFormat::Gif => "gif",
        };
        f.write_str(s)
    }
}

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const BMP_MAGIC: &[u8] = b"BM";
const GIF87_MAGIC: &[u8] = b"GIF87a";
const GIF89_MAGIC: &[u8] = b"GIF89a";

/// Detects the image container from the first bytes of `data`.
pub fn sniff_image_format(data: &[u8]) -> Option<SniffedFormat> {
    if data.starts_with(PNG_MAGIC) {
        Some(SniffedFormat::Png)
    } else if data.starts_with(JPEG_MAGIC) {
        Some(SniffedFormat::Jpeg)
    } else if data.starts_with(GIF87_MAGIC) || data.starts_with(GIF89_MAGIC) {
        Some(SniffedFormat::Gif)
    } else if data.len() >= 14 && data.starts_with(BMP_MAGIC) {
        // BITMAPFILEHEADER is 14 bytes; a bare "BM" is not enough.
        Some(SniffedFormat::Bmp)
    } else {
        None
    }
}
