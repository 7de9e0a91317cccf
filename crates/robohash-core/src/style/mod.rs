//! Closed value types consulted when encoding a request.
//!
//! Each type knows the literal text the remote service expects for it, and
//! parses back from either its variant name (`monsters`) or that literal (`set2`).

mod background_set;
mod extension;
mod gravatar;
mod image_set;
mod param;

pub use background_set::BackgroundSet;
pub use extension::ImageExtension;
pub use gravatar::GravatarMode;
pub use image_set::ImageSet;
pub use param::UrlParameter;

/// Text did not name any variant of the value type being parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{input}` (expected one of: {expected})")]
pub struct ParseStyleError {
    pub kind: &'static str,
    pub input: String,
    pub expected: String,
}

/// Shared lookup for `FromStr` impls: matches `input` case-insensitively against
/// each variant's name and URL value.
pub(crate) fn parse_variant<T: Copy>(
    kind: &'static str,
    input: &str,
    all: &[T],
    names: impl Fn(T) -> [&'static str; 2],
) -> Result<T, ParseStyleError> {
    let needle = input.trim();
    all.iter()
        .copied()
        .find(|v| names(*v).iter().any(|n| n.eq_ignore_ascii_case(needle)))
        .ok_or_else(|| ParseStyleError {
            kind,
            input: input.to_string(),
            expected: all
                .iter()
                .map(|v| names(*v)[0])
                .collect::<Vec<_>>()
                .join(", "),
        })
}
