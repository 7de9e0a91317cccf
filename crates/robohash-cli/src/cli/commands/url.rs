//! `robohash url <key>` – print the request URL.

use anyhow::Result;
use robohash_core::build_request_url;
use robohash_core::config::RoboHashConfig;

use crate::cli::RequestArgs;

pub fn run_url(cfg: &RoboHashConfig, args: &RequestArgs) -> Result<()> {
    let request = args.to_request(&cfg.defaults)?;
    println!("{}", build_request_url(&request)?);
    Ok(())
}
