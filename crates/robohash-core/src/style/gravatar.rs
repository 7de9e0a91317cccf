use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{parse_variant, ParseStyleError, UrlParameter};

/// Whether the service should treat the avatar key as an email and try a
/// Gravatar lookup before generating an avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GravatarMode {
    #[default]
    No,
    Yes,
    /// Gravatar lookup, and the key is already an MD5 hash of the email.
    Hashed,
}

impl GravatarMode {
    pub const ALL: [GravatarMode; 3] = [GravatarMode::No, GravatarMode::Yes, GravatarMode::Hashed];

    pub fn url_value(self) -> &'static str {
        match self {
            GravatarMode::No => "no",
            GravatarMode::Yes => "yes",
            GravatarMode::Hashed => "hashed",
        }
    }

    /// The `gravatar` query fragment, or `None` for [`GravatarMode::No`] which the
    /// service expresses by omitting the parameter.
    pub fn url_parameter(self, first: bool) -> Option<String> {
        match self {
            GravatarMode::No => None,
            mode => Some(UrlParameter::Gravatar.encode(mode.url_value(), first)),
        }
    }
}

impl fmt::Display for GravatarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url_value())
    }
}

impl FromStr for GravatarMode {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("gravatar mode", s, &Self::ALL, |v| [v.url_value(), v.url_value()])
    }
}
