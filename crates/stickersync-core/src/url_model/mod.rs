//! Mapping of an asset identity to its remote URL and local cache path.
//!
//! Both locations are derived from the same encoded segment, so an identity
//! always resolves to the same remote/local pair.

mod encode;
mod reference;

use std::path::{Path, PathBuf};

use crate::identity::{AssetIdentity, AssetKind};

pub use encode::encode_path;
pub use reference::{to_reference_url, to_reference_url_at};

/// Remote base endpoints, one per asset kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub sticker: String,
    pub wallpaper: String,
}

impl Endpoints {
    pub fn base(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Sticker => &self.sticker,
            AssetKind::Wallpaper => &self.wallpaper,
        }
    }
}

/// Resolved remote and local location of one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocation {
    pub kind: AssetKind,
    pub remote_url: String,
    pub local_path: PathBuf,
}

/// Encoded path segment of `kind` for `identity`.
pub fn remote_segment(kind: AssetKind, identity: &AssetIdentity) -> String {
    encode_path(&kind.raw_path(identity))
}

/// Full remote URL: the kind's base endpoint followed by the encoded segment.
///
/// Not a plain concatenation: the join is normalized so base and segment are
/// separated by exactly one `/`, whether or not the configured base ends in
/// `/` or the sticker path starts with one.
pub fn remote_url(endpoints: &Endpoints, kind: AssetKind, identity: &AssetIdentity) -> String {
    let base = endpoints.base(kind).trim_end_matches('/');
    let segment = remote_segment(kind, identity);
    if segment.starts_with('/') {
        format!("{}{}", base, segment)
    } else {
        format!("{}/{}", base, segment)
    }
}

/// Local cache path: `<root>/<stickers|wallpapers>/<encoded segment>`.
///
/// The segment is joined component by component; empty, `.` and `..`
/// components are dropped so the result always stays under `root`.
pub fn local_path(root: &Path, kind: AssetKind, identity: &AssetIdentity) -> PathBuf {
    let mut path = root.join(kind.local_dir());
    for part in remote_segment(kind, identity).split('/') {
        if part.is_empty() || part == "." || part == ".." {
            continue;
        }
        path.push(part);
    }
    path
}

/// Resolves both locations of `kind` for `identity`.
pub fn resolve(
    identity: &AssetIdentity,
    endpoints: &Endpoints,
    root: &Path,
    kind: AssetKind,
) -> AssetLocation {
    AssetLocation {
        kind,
        remote_url: remote_url(endpoints, kind, identity),
        local_path: local_path(root, kind, identity),
    }
}
