use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{parse_variant, ParseStyleError, UrlParameter};

/// Avatar visual styles offered by RoboHash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSet {
    /// The classic robots.
    Default,
    Monsters,
    SexyRobots,
    Kittens,
    Humans,
    /// Let the service choose. Never mixed with concrete sets in a request.
    Any,
}

impl ImageSet {
    pub const ALL: [ImageSet; 6] = [
        ImageSet::Default,
        ImageSet::Monsters,
        ImageSet::SexyRobots,
        ImageSet::Kittens,
        ImageSet::Humans,
        ImageSet::Any,
    ];

    /// Value used with the singular `set` parameter, e.g. `set2`.
    pub fn url_value(self) -> &'static str {
        match self {
            ImageSet::Default => "set1",
            ImageSet::Monsters => "set2",
            ImageSet::SexyRobots => "set3",
            ImageSet::Kittens => "set4",
            ImageSet::Humans => "set5",
            ImageSet::Any => "any",
        }
    }

    /// Value used inside the comma-joined `sets` list, e.g. `2`.
    /// `Any` has no list form.
    pub fn list_value(self) -> Option<&'static str> {
        match self {
            ImageSet::Default => Some("1"),
            ImageSet::Monsters => Some("2"),
            ImageSet::SexyRobots => Some("3"),
            ImageSet::Kittens => Some("4"),
            ImageSet::Humans => Some("5"),
            ImageSet::Any => None,
        }
    }

    pub fn is_any(self) -> bool {
        self == ImageSet::Any
    }

    pub fn name(self) -> &'static str {
        match self {
            ImageSet::Default => "default",
            ImageSet::Monsters => "monsters",
            ImageSet::SexyRobots => "sexy_robots",
            ImageSet::Kittens => "kittens",
            ImageSet::Humans => "humans",
            ImageSet::Any => "any",
        }
    }

    /// `?set=<value>` or `&set=<value>` for this single set.
    pub fn url_parameter(self, first: bool) -> String {
        UrlParameter::ImageSet.encode(self.url_value(), first)
    }
}

impl fmt::Display for ImageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url_value())
    }
}

impl FromStr for ImageSet {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("image set", s, &Self::ALL, |v| [v.name(), v.url_value()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_values() {
        assert_eq!(ImageSet::Default.url_value(), "set1");
        assert_eq!(ImageSet::Monsters.url_value(), "set2");
        assert_eq!(ImageSet::SexyRobots.url_value(), "set3");
        assert_eq!(ImageSet::Kittens.url_value(), "set4");
        assert_eq!(ImageSet::Humans.url_value(), "set5");
        assert_eq!(ImageSet::Any.url_value(), "any");
    }

    #[test]
    fn list_values() {
        assert_eq!(ImageSet::Default.list_value(), Some("1"));
        assert_eq!(ImageSet::Humans.list_value(), Some("5"));
        assert_eq!(ImageSet::Any.list_value(), None);
    }

    #[test]
    fn url_parameter_prefix() {
        assert_eq!(ImageSet::Kittens.url_parameter(true), "?set=set4");
        assert_eq!(ImageSet::Any.url_parameter(false), "&set=any");
    }

    #[test]
    fn parse_by_name_or_value() {
        assert_eq!("monsters".parse::<ImageSet>().unwrap(), ImageSet::Monsters);
        assert_eq!("SEXY_ROBOTS".parse::<ImageSet>().unwrap(), ImageSet::SexyRobots);
        assert_eq!("set5".parse::<ImageSet>().unwrap(), ImageSet::Humans);
        assert_eq!(" any ".parse::<ImageSet>().unwrap(), ImageSet::Any);
        let err = "set9".parse::<ImageSet>().unwrap_err();
        assert_eq!(err.input, "set9");
        assert!(err.to_string().contains("monsters"));
    }
}
