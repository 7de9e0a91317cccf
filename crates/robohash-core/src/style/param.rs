use std::fmt;

/// Query parameters understood by the RoboHash service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlParameter {
    ImageSet,
    ImageSets,
    BackgroundSet,
    Size,
    Gravatar,
    IgnoreExtension,
}

impl UrlParameter {
    pub fn name(self) -> &'static str {
        match self {
            UrlParameter::ImageSet => "set",
            UrlParameter::ImageSets => "sets",
            UrlParameter::BackgroundSet => "bgset",
            UrlParameter::Size => "size",
            UrlParameter::Gravatar => "gravatar",
            UrlParameter::IgnoreExtension => "ignoreext",
        }
    }

    /// `?name=value` when `first`, otherwise `&name=value`. `value` is emitted as is.
    pub fn encode(self, value: &str, first: bool) -> String {
        let prefix = if first { '?' } else { '&' };
        format!("{}{}={}", prefix, self.name(), value)
    }
}

impl fmt::Display for UrlParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
