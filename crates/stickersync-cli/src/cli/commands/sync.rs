//! `stickersync sync` – run one sync cycle.

use anyhow::Result;
use stickersync_core::config::SyncConfig;

use super::resolve_identity;
use crate::cli::StickerArgs;

pub async fn run_sync(cfg: &SyncConfig, args: &StickerArgs, json: bool) -> Result<()> {
    let identity = resolve_identity(cfg, args)?;
    let engine = cfg.build_sync()?;
    let result = engine.sync(&identity).await;

    if result.sticker.is_updated() || result.wallpaper.is_updated() {
        tracing::info!("sticker updated: {}", identity.path);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("sticker    {:?}  {}", result.sticker, result.sticker_url);
        println!("wallpaper  {:?}  {}", result.wallpaper, result.wallpaper_url);
    }
    Ok(())
}
