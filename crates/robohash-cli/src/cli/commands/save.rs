//! `robohash save <key>` – download an avatar into a new file.

use anyhow::{Context, Result};
use robohash_core::config::RoboHashConfig;
use robohash_core::storage::default_filename;
use robohash_core::RoboHashClient;
use std::path::{Path, PathBuf};

use crate::cli::RequestArgs;

pub fn run_save(cfg: &RoboHashConfig, args: &RequestArgs, output: Option<&Path>) -> Result<()> {
    let request = args.to_request(&cfg.defaults)?;
    let dest: PathBuf = match output {
        Some(p) => p.to_path_buf(),
        None => {
            let name = default_filename(&request).with_context(|| {
                format!("key `{}` is not a usable filename; pass --output", request.avatar_key())
            })?;
            std::env::current_dir()?.join(name)
        }
    };

    let client = RoboHashClient::from_config(cfg);
    client.save_to_file(&request, &dest)?;
    println!("Saved {}", dest.display());
    Ok(())
}
