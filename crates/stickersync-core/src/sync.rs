//! One sync cycle for the current sticker: check both assets, install the
//! stale ones, hand back references to whatever is on disk afterwards.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::checksum::ChecksumAlgorithm;
use crate::identity::{AssetIdentity, AssetKind};
use crate::installer::install;
use crate::remote::RemoteSource;
use crate::staleness::is_stale;
use crate::url_model::{self, AssetLocation, Endpoints};

/// Terminal state of one asset after a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetOutcome {
    /// Local copy matched the remote digest, or the check could not be made.
    Fresh,
    /// Local copy was stale and has been replaced.
    Installed,
    /// Local copy was stale but the download or write failed.
    InstallFailed,
}

impl AssetOutcome {
    pub fn is_updated(self) -> bool {
        self == AssetOutcome::Installed
    }
}

/// References to the sticker and wallpaper, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncResult {
    #[serde(rename = "stickerDataURL")]
    pub sticker_url: String,
    #[serde(rename = "wallpaperURL")]
    pub wallpaper_url: String,
    #[serde(skip)]
    pub sticker: AssetOutcome,
    #[serde(skip)]
    pub wallpaper: AssetOutcome,
}

/// Staleness of one asset without installing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetStatus {
    pub location: AssetLocation,
    pub stale: bool,
}

/// Sync engine bound to a remote source, endpoints and a local asset root.
#[derive(Clone)]
pub struct AssetSync {
    source: Arc<dyn RemoteSource>,
    endpoints: Endpoints,
    asset_root: PathBuf,
    algorithm: ChecksumAlgorithm,
}

impl AssetSync {
    pub fn new(
        source: Arc<dyn RemoteSource>,
        endpoints: Endpoints,
        asset_root: impl Into<PathBuf>,
        algorithm: ChecksumAlgorithm,
    ) -> Self {
        Self {
            source,
            endpoints,
            asset_root: asset_root.into(),
            algorithm,
        }
    }

    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }

    pub fn algorithm(&self) -> ChecksumAlgorithm {
        self.algorithm
    }

    /// Remote and local location of `kind` for `identity`.
    pub fn locate(&self, identity: &AssetIdentity, kind: AssetKind) -> AssetLocation {
        url_model::resolve(identity, &self.endpoints, &self.asset_root, kind)
    }

    /// Runs one cycle for `identity`. Never fails: each asset is checked and,
    /// if stale, installed independently of the other, and the returned URLs
    /// always point at the current local files.
    pub async fn sync(&self, identity: &AssetIdentity) -> SyncResult {
        let sticker = self.locate(identity, AssetKind::Sticker);
        let wallpaper = self.locate(identity, AssetKind::Wallpaper);

        let (sticker_outcome, wallpaper_outcome) =
            tokio::join!(self.sync_asset(&sticker), self.sync_asset(&wallpaper));

        tracing::debug!(
            sticker = ?sticker_outcome,
            wallpaper = ?wallpaper_outcome,
            "sync cycle finished for {}",
            identity.path
        );

        SyncResult {
            sticker_url: url_model::to_reference_url(&sticker.local_path),
            wallpaper_url: url_model::to_reference_url(&wallpaper.local_path),
            sticker: sticker_outcome,
            wallpaper: wallpaper_outcome,
        }
    }

    /// Reports staleness of both assets without downloading them.
    pub async fn check(&self, identity: &AssetIdentity) -> [AssetStatus; 2] {
        let sticker = self.locate(identity, AssetKind::Sticker);
        let wallpaper = self.locate(identity, AssetKind::Wallpaper);
        let (s, w) = tokio::join!(self.is_stale(&sticker), self.is_stale(&wallpaper));
        [
            AssetStatus {
                location: sticker,
                stale: s,
            },
            AssetStatus {
                location: wallpaper,
                stale: w,
            },
        ]
    }

    async fn is_stale(&self, location: &AssetLocation) -> bool {
        is_stale(
            &self.source,
            self.algorithm,
            &location.remote_url,
            &location.local_path,
        )
        .await
    }

    async fn sync_asset(&self, location: &AssetLocation) -> AssetOutcome {
        if !self.is_stale(location).await {
            return AssetOutcome::Fresh;
        }
        tracing::debug!(kind = %location.kind, "local copy is stale");
        if install(&self.source, &location.remote_url, &location.local_path).await {
            AssetOutcome::Installed
        } else {
            AssetOutcome::InstallFailed
        }
    }
}
