//! CLI command handlers. Each command is in its own file.

mod check;
mod checksum;
mod paths;
mod sync;

pub use check::run_check;
pub use checksum::run_checksum;
pub use paths::run_paths;
pub use sync::run_sync;

use anyhow::{Context, Result};
use stickersync_core::config::SyncConfig;
use stickersync_core::identity::AssetIdentity;

use super::StickerArgs;

/// Sticker from the command line, else the one selected in the config.
pub(crate) fn resolve_identity(cfg: &SyncConfig, args: &StickerArgs) -> Result<AssetIdentity> {
    match (&args.path, &args.name) {
        (Some(path), Some(name)) => Ok(AssetIdentity::new(path.clone(), name.clone())),
        (None, None) => cfg
            .sticker
            .clone()
            .context("no sticker selected: pass --path and --name or set [sticker] in the config"),
        _ => anyhow::bail!("--path and --name must be given together"),
    }
}
