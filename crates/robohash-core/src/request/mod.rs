//! In-memory description of one avatar request.
//!
//! A [`RequestConfig`] is built once per avatar, adjusted through chained
//! setters, and then handed read-only to [`crate::url_encoder::build_request_url`].
//! Setters that can reject input return `Result<&mut Self>`, the rest return
//! `&mut Self`, so both chain with `?`.

mod key;

use std::fmt;

use crate::error::{Result, RoboHashError};
use crate::style::{BackgroundSet, GravatarMode, ImageExtension, ImageSet};

pub use key::{is_non_blank, is_url_safe};

pub const DEFAULT_WIDTH: u32 = 300;
pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_IGNORE_EXTENSION: bool = true;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestConfig {
    avatar_key: String,
    /// Never empty; holds `[Any]` when nothing concrete was requested.
    image_sets: Vec<ImageSet>,
    background_set: BackgroundSet,
    width: u32,
    height: u32,
    gravatar_mode: GravatarMode,
    ignore_extension: bool,
    image_extension: ImageExtension,
    unsafe_key_mode: bool,
}

impl RequestConfig {
    /// Safe-mode construction: `avatar_key` must be non-blank and URL-safe.
    pub fn new(avatar_key: impl Into<String>) -> Result<Self> {
        Self::create(avatar_key, false)
    }

    /// Construction that accepts any non-blank key; it is percent-encoded when
    /// the URL is built.
    pub fn new_unsafe(avatar_key: impl Into<String>) -> Result<Self> {
        Self::create(avatar_key, true)
    }

    pub fn create(avatar_key: impl Into<String>, unsafe_key_mode: bool) -> Result<Self> {
        let avatar_key = avatar_key.into();
        if !is_non_blank(&avatar_key) {
            return Err(RoboHashError::invalid("avatar key must not be empty or blank"));
        }
        if !unsafe_key_mode && !is_url_safe(&avatar_key) {
            return Err(RoboHashError::invalid(format!(
                "avatar key `{}` contains characters outside [A-Za-z0-9._~-]",
                avatar_key
            )));
        }

        Ok(Self {
            avatar_key,
            image_sets: vec![ImageSet::Any],
            background_set: BackgroundSet::Any,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gravatar_mode: GravatarMode::No,
            ignore_extension: DEFAULT_IGNORE_EXTENSION,
            image_extension: ImageExtension::Png,
            unsafe_key_mode,
        })
    }

    // -- image sets ---------------------------------------------------------

    /// Appends `set`. Adding a concrete set drops the `Any` placeholder.
    pub fn add_image_set(&mut self, set: ImageSet) -> &mut Self {
        if !set.is_any() {
            self.image_sets.retain(|s| !s.is_any());
        }
        self.image_sets.push(set);
        self
    }

    /// Removes every occurrence of `set`; an emptied list falls back to `[Any]`.
    pub fn remove_image_set(&mut self, set: ImageSet) -> &mut Self {
        self.image_sets.retain(|s| *s != set);
        self.ensure_image_sets();
        self
    }

    /// Adds each set in order, with the same `Any` handling as [`Self::add_image_set`].
    pub fn add_image_sets(&mut self, sets: &[ImageSet]) -> Result<&mut Self> {
        require_non_empty(sets)?;
        for set in sets {
            self.add_image_set(*set);
        }
        Ok(self)
    }

    pub fn remove_image_sets(&mut self, sets: &[ImageSet]) -> Result<&mut Self> {
        require_non_empty(sets)?;
        self.image_sets.retain(|s| !sets.contains(s));
        self.ensure_image_sets();
        Ok(self)
    }

    /// Replaces the current sets, as if starting empty and adding each of `sets`.
    pub fn set_image_sets(&mut self, sets: &[ImageSet]) -> Result<&mut Self> {
        require_non_empty(sets)?;
        self.image_sets.clear();
        for set in sets {
            self.add_image_set(*set);
        }
        Ok(self)
    }

    pub fn reset_image_sets(&mut self) -> &mut Self {
        self.image_sets.clear();
        self.image_sets.push(ImageSet::Any);
        self
    }

    fn ensure_image_sets(&mut self) {
        if self.image_sets.is_empty() {
            self.image_sets.push(ImageSet::Any);
        }
    }

    // -- single-valued options ---------------------------------------------

    pub fn set_background_set(&mut self, set: BackgroundSet) -> &mut Self {
        self.background_set = set;
        self
    }

    pub fn reset_background_set(&mut self) -> &mut Self {
        self.set_background_set(BackgroundSet::Any)
    }

    pub fn set_image_extension(&mut self, ext: ImageExtension) -> &mut Self {
        self.image_extension = ext;
        self
    }

    pub fn reset_image_extension(&mut self) -> &mut Self {
        self.set_image_extension(ImageExtension::Png)
    }

    /// Whether the service should ignore the key's extension when hashing it.
    pub fn set_ignore_extension(&mut self, ignore: bool) -> &mut Self {
        self.ignore_extension = ignore;
        self
    }

    pub fn reset_ignore_extension(&mut self) -> &mut Self {
        self.set_ignore_extension(DEFAULT_IGNORE_EXTENSION)
    }

    pub fn set_gravatar_mode(&mut self, mode: GravatarMode) -> &mut Self {
        self.gravatar_mode = mode;
        self
    }

    pub fn reset_gravatar_mode(&mut self) -> &mut Self {
        self.set_gravatar_mode(GravatarMode::No)
    }

    // -- size ---------------------------------------------------------------

    pub fn set_width(&mut self, width: i32) -> Result<&mut Self> {
        self.width = dimension("width", width)?;
        Ok(self)
    }

    pub fn reset_width(&mut self) -> &mut Self {
        self.width = DEFAULT_WIDTH;
        self
    }

    pub fn set_height(&mut self, height: i32) -> Result<&mut Self> {
        self.height = dimension("height", height)?;
        Ok(self)
    }

    pub fn reset_height(&mut self) -> &mut Self {
        self.height = DEFAULT_HEIGHT;
        self
    }

    /// Sets both dimensions; on error neither is changed.
    pub fn set_size(&mut self, width: i32, height: i32) -> Result<&mut Self> {
        let width = dimension("width", width)?;
        let height = dimension("height", height)?;
        self.width = width;
        self.height = height;
        Ok(self)
    }

    pub fn reset_size(&mut self) -> &mut Self {
        self.reset_width().reset_height()
    }

    // -- accessors ----------------------------------------------------------

    pub fn avatar_key(&self) -> &str {
        &self.avatar_key
    }

    pub fn image_sets(&self) -> &[ImageSet] {
        &self.image_sets
    }

    pub fn background_set(&self) -> BackgroundSet {
        self.background_set
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn gravatar_mode(&self) -> GravatarMode {
        self.gravatar_mode
    }

    pub fn ignore_extension(&self) -> bool {
        self.ignore_extension
    }

    pub fn image_extension(&self) -> ImageExtension {
        self.image_extension
    }

    pub fn unsafe_key_mode(&self) -> bool {
        self.unsafe_key_mode
    }
}

fn require_non_empty(sets: &[ImageSet]) -> Result<()> {
    if sets.is_empty() {
        return Err(RoboHashError::invalid("image set collection must not be empty"));
    }
    Ok(())
}

fn dimension(name: &str, value: i32) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| RoboHashError::invalid(format!("{} must be >= 0, got {}", name, value)))
}

impl fmt::Display for RequestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets: Vec<&str> = self.image_sets.iter().map(|s| s.name()).collect();
        write!(
            f,
            "RequestConfig {{ avatar_key: {:?}, image_sets: [{}], background_set: {}, \
             size: {}x{}, gravatar_mode: {}, ignore_extension: {}, image_extension: {}, \
             unsafe_key_mode: {} }}",
            self.avatar_key,
            sets.join(", "),
            self.background_set.name(),
            self.width,
            self.height,
            self.gravatar_mode,
            self.ignore_extension,
            self.image_extension.name(),
            self.unsafe_key_mode,
        )
    }
}
