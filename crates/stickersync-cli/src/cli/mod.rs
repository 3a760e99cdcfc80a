//! CLI for stickersync.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use stickersync_core::config::{self, SyncConfig};
use stickersync_core::logging::Verbosity;

use commands::{run_check, run_checksum, run_paths, run_sync};

/// Top-level CLI for stickersync.
#[derive(Debug, Parser)]
#[command(name = "stickersync")]
#[command(about = "Keep the local sticker and wallpaper cache in step with the asset server", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/stickersync/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also log checksum comparisons and transfer sizes.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log failed checks and installs.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Sticker selection; falls back to `[sticker]` in the config when omitted.
#[derive(Debug, Clone, Default, Args)]
pub struct StickerArgs {
    /// Sticker path, e.g. "/happy/aqua.png".
    #[arg(long, requires = "name")]
    pub path: Option<String>,
    /// Sticker name used to locate the wallpaper, e.g. "aqua".
    #[arg(long, requires = "path")]
    pub name: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Refresh the sticker and wallpaper if the server has newer copies.
    Sync {
        #[command(flatten)]
        sticker: StickerArgs,
        /// Print the reference URLs as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Report whether the cached copies are stale, without downloading.
    Check {
        #[command(flatten)]
        sticker: StickerArgs,
    },

    /// Print the resolved remote URLs and local paths.
    Paths {
        #[command(flatten)]
        sticker: StickerArgs,
    },

    /// Compute the digest of a file with the configured algorithm.
    Checksum {
        /// Path to the file.
        path: String,
        /// Use SHA-256 regardless of configuration.
        #[arg(long)]
        sha256: bool,
    },
}

fn load_config(path: Option<&Path>) -> Result<SyncConfig> {
    match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_init(),
    }
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.verbose {
            Verbosity::Verbose
        } else if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }

    pub async fn run(self) -> Result<()> {
        let cfg = load_config(self.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Sync { sticker, json } => run_sync(&cfg, &sticker, json).await?,
            CliCommand::Check { sticker } => run_check(&cfg, &sticker).await?,
            CliCommand::Paths { sticker } => run_paths(&cfg, &sticker)?,
            CliCommand::Checksum { path, sha256 } => {
                run_checksum(&cfg, Path::new(&path), sha256)?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
