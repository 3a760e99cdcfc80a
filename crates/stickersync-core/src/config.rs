use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::checksum::ChecksumAlgorithm;
use crate::identity::AssetIdentity;
use crate::remote::{CurlSource, HttpOptions, RemoteSource};
use crate::sync::AssetSync;
use crate::url_model::Endpoints;

const APP_PREFIX: &str = "stickersync";

const DEFAULT_STICKER_ASSETS_URL: &str = "https://doki.assets.unthrow.io/stickers/vscode";
const DEFAULT_WALLPAPER_ASSETS_URL: &str = "https://doki.assets.unthrow.io/backgrounds/wallpapers";

/// Global configuration loaded from `~/.config/stickersync/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Base URL of the sticker (primary) assets.
    pub sticker_assets_url: String,
    /// Base URL of the wallpaper (companion) assets.
    pub wallpaper_assets_url: String,
    /// Root of the local `stickers/` and `wallpapers/` directories.
    /// Defaults to the config directory itself.
    #[serde(default)]
    pub asset_root: Option<PathBuf>,
    /// Digest published in the `.checksum.txt` sidecars: "md5" (default) or "sha256".
    #[serde(default)]
    pub checksum_algorithm: ChecksumAlgorithm,
    /// Optional transfer timeouts; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpOptions>,
    /// Currently selected sticker, if the theme has one.
    #[serde(default)]
    pub sticker: Option<AssetIdentity>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            sticker_assets_url: DEFAULT_STICKER_ASSETS_URL.to_string(),
            wallpaper_assets_url: DEFAULT_WALLPAPER_ASSETS_URL.to_string(),
            asset_root: None,
            checksum_algorithm: ChecksumAlgorithm::default(),
            http: None,
            sticker: None,
        }
    }
}

impl SyncConfig {
    /// Checks that both endpoints are absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("sticker_assets_url", &self.sticker_assets_url),
            ("wallpaper_assets_url", &self.wallpaper_assets_url),
        ] {
            let parsed =
                url::Url::parse(value).with_context(|| format!("{} is not a URL: {}", key, value))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                anyhow::bail!("{} must be http or https, got {}", key, parsed.scheme());
            }
        }
        Ok(())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            sticker: self.sticker_assets_url.clone(),
            wallpaper: self.wallpaper_assets_url.clone(),
        }
    }

    /// Local asset root: the configured one, else the XDG config directory.
    pub fn resolve_asset_root(&self) -> Result<PathBuf> {
        match &self.asset_root {
            Some(root) => Ok(root.clone()),
            None => config_dir(),
        }
    }

    /// Builds a sync engine backed by libcurl.
    pub fn build_sync(&self) -> Result<AssetSync> {
        self.validate()?;
        let source: Arc<dyn RemoteSource> =
            Arc::new(CurlSource::new(self.http.unwrap_or_default()));
        Ok(AssetSync::new(
            source,
            self.endpoints(),
            self.resolve_asset_root()?,
            self.checksum_algorithm,
        ))
    }
}

/// `$XDG_CONFIG_HOME/stickersync`.
pub fn config_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.get_config_home().join(APP_PREFIX))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SyncConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SyncConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<SyncConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SyncConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
