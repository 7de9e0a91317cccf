//! Client-side request builder and image retrieval for the RoboHash avatar service.
//!
//! ```no_run
//! use robohash_core::{build_request_url, ImageSet, RequestConfig};
//!
//! let mut config = RequestConfig::new("nathan-cheshire")?;
//! config.add_image_set(ImageSet::Monsters).set_size(600, 600)?;
//! assert_eq!(
//!     build_request_url(&config)?,
//!     "https://robohash.org/nathan-cheshire.png?set=set2&bgset=any&size=600x600"
//! );
//! # Ok::<(), robohash_core::RoboHashError>(())
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod handler;
pub mod logging;
pub mod request;
pub mod storage;
pub mod style;
pub mod url_encoder;

pub use error::{Result, RoboHashError};
pub use handler::{get_image_bytes, save_to_file, RoboHashClient};
pub use request::RequestConfig;
pub use style::{BackgroundSet, GravatarMode, ImageExtension, ImageSet, UrlParameter};
pub use url_encoder::build_request_url;
