//! Logical asset identity and the two asset kinds derived from it.

use serde::{Deserialize, Serialize};

/// Identity of the currently selected sticker, as provided by the theme
/// configuration. `path` locates the sticker itself; `name` locates the
/// matching wallpaper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetIdentity {
    pub path: String,
    pub name: String,
}

impl AssetIdentity {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

/// The two assets synchronized for every identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Primary asset, located by `AssetIdentity::path`.
    Sticker,
    /// Companion asset, located by `AssetIdentity::name`.
    Wallpaper,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::Sticker, AssetKind::Wallpaper];

    /// Subdirectory of the asset root holding this kind.
    pub fn local_dir(self) -> &'static str {
        match self {
            AssetKind::Sticker => "stickers",
            AssetKind::Wallpaper => "wallpapers",
        }
    }

    /// Raw (unencoded) path of this asset for `identity`.
    pub fn raw_path(self, identity: &AssetIdentity) -> String {
        match self {
            AssetKind::Sticker => identity.path.clone(),
            AssetKind::Wallpaper => format!("/{}", identity.name),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Sticker => "sticker",
            AssetKind::Wallpaper => "wallpaper",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
