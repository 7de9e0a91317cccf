use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{parse_variant, ParseStyleError, UrlParameter};

/// Background styles offered by RoboHash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundSet {
    /// Outdoor scenes.
    Outside,
    /// Mostly spirals, with a few other patterns.
    SpiralAndPatterns,
    /// Let the service choose.
    #[default]
    Any,
}

impl BackgroundSet {
    pub const ALL: [BackgroundSet; 3] = [
        BackgroundSet::Outside,
        BackgroundSet::SpiralAndPatterns,
        BackgroundSet::Any,
    ];

    pub fn url_value(self) -> &'static str {
        match self {
            BackgroundSet::Outside => "bg1",
            BackgroundSet::SpiralAndPatterns => "bg2",
            BackgroundSet::Any => "any",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BackgroundSet::Outside => "outside",
            BackgroundSet::SpiralAndPatterns => "spiral_and_patterns",
            BackgroundSet::Any => "any",
        }
    }

    pub fn url_parameter(self, first: bool) -> String {
        UrlParameter::BackgroundSet.encode(self.url_value(), first)
    }
}

impl fmt::Display for BackgroundSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url_value())
    }
}

impl FromStr for BackgroundSet {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("background set", s, &Self::ALL, |v| [v.name(), v.url_value()])
    }
}
