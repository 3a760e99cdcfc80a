//! `stickersync check` – report staleness without installing.

use anyhow::Result;
use stickersync_core::config::SyncConfig;

use super::resolve_identity;
use crate::cli::StickerArgs;

pub async fn run_check(cfg: &SyncConfig, args: &StickerArgs) -> Result<()> {
    let identity = resolve_identity(cfg, args)?;
    let engine = cfg.build_sync()?;
    for status in engine.check(&identity).await {
        let state = if status.stale { "stale" } else { "up to date" };
        println!(
            "{:<10} {:<10} {}",
            status.location.kind.label(),
            state,
            status.location.local_path.display()
        );
    }
    Ok(())
}
