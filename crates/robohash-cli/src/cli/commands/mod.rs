//! CLI command handlers.

mod formats;
mod save;
mod url;

pub use formats::run_formats;
pub use save::run_save;
pub use url::run_url;
