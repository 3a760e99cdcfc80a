//! `stickersync paths` – show where each asset comes from and goes to.

use anyhow::Result;
use stickersync_core::config::SyncConfig;
use stickersync_core::identity::AssetKind;
use stickersync_core::url_model;

use super::resolve_identity;
use crate::cli::StickerArgs;

pub fn run_paths(cfg: &SyncConfig, args: &StickerArgs) -> Result<()> {
    let identity = resolve_identity(cfg, args)?;
    let root = cfg.resolve_asset_root()?;
    let endpoints = cfg.endpoints();
    for kind in AssetKind::ALL {
        let loc = url_model::resolve(&identity, &endpoints, &root, kind);
        println!("{}:", kind);
        println!("  remote  {}", loc.remote_url);
        println!("  local   {}", loc.local_path.display());
    }
    Ok(())
}
