//! CLI for building RoboHash avatar URLs and saving avatars.

mod commands;
mod request_args;

use anyhow::Result;
use clap::{Parser, Subcommand};
use robohash_core::config;
use std::path::PathBuf;

use commands::{run_formats, run_save, run_url};
pub use request_args::RequestArgs;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "robohash")]
#[command(about = "Build RoboHash avatar URLs and download avatars", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the request URL for an avatar.
    Url {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Download an avatar and save it to a new file.
    #[command(alias = "fetch")]
    Save {
        #[command(flatten)]
        request: RequestArgs,

        /// Destination file (must not exist). Defaults to `<key>.<ext>` in the current directory.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List accepted values for --set, --bg, --ext and --gravatar.
    Formats,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Formats => run_formats(),
            CliCommand::Url { request } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_url(&cfg, &request)?;
            }
            CliCommand::Save { request, output } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_save(&cfg, &request, output.as_deref())?;
            }
        }

        Ok(())
    }
}
