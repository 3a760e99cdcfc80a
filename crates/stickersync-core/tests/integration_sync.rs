//! Integration tests: full sync cycles over real HTTP against a local server.

mod common;

use std::path::Path;
use std::sync::Arc;

use common::asset_server::AssetServer;
use stickersync_core::checksum::ChecksumAlgorithm;
use stickersync_core::identity::AssetIdentity;
use stickersync_core::remote::{CurlSource, HttpOptions, RemoteSource};
use stickersync_core::sync::{AssetOutcome, AssetSync};
use stickersync_core::url_model::Endpoints;
use tempfile::tempdir;

const STICKER_PATH: &str = "/stickers/vscode/happy/aqua.png";
const WALLPAPER_PATH: &str = "/backgrounds/wallpapers/aqua";

fn engine(server: &AssetServer, root: &Path) -> AssetSync {
    let source: Arc<dyn RemoteSource> = Arc::new(CurlSource::new(HttpOptions {
        connect_timeout_secs: 5,
        timeout_secs: 10,
    }));
    AssetSync::new(
        source,
        Endpoints {
            sticker: format!("{}/stickers/vscode", server.base()),
            wallpaper: format!("{}/backgrounds/wallpapers", server.base()),
        },
        root,
        ChecksumAlgorithm::Md5,
    )
}

fn aqua() -> AssetIdentity {
    AssetIdentity::new("/happy/aqua.png", "aqua")
}

#[tokio::test]
async fn first_sync_downloads_each_asset_once() {
    let server = AssetServer::start();
    let sticker: Vec<u8> = (0u8..200).cycle().take(48 * 1024).collect();
    server.publish(STICKER_PATH, &sticker);
    server.publish(WALLPAPER_PATH, b"wallpaper bytes");
    let root = tempdir().unwrap();

    let result = engine(&server, root.path()).sync(&aqua()).await;

    assert_eq!(result.sticker, AssetOutcome::Installed);
    assert_eq!(result.wallpaper, AssetOutcome::Installed);
    assert_eq!(server.hits(STICKER_PATH), 1);
    assert_eq!(server.hits(WALLPAPER_PATH), 1);
    let sticker_file = root.path().join("stickers/happy/aqua.png");
    let wallpaper_file = root.path().join("wallpapers/aqua");
    assert_eq!(std::fs::read(&sticker_file).unwrap(), sticker);
    assert_eq!(std::fs::read(&wallpaper_file).unwrap(), b"wallpaper bytes");
    assert!(result.sticker_url.starts_with("file://"));
    assert!(result.sticker_url.contains("?time="));
    assert!(result.wallpaper_url.starts_with("file://"));
    assert!(result.wallpaper_url.contains("?time="));
}

#[tokio::test]
async fn unchanged_remote_means_zero_downloads() {
    let server = AssetServer::start();
    server.publish(STICKER_PATH, b"sticker");
    server.publish(WALLPAPER_PATH, b"wallpaper");
    let root = tempdir().unwrap();
    let sync = engine(&server, root.path());

    let first = sync.sync(&aqua()).await;
    let modified = std::fs::metadata(root.path().join("stickers/happy/aqua.png"))
        .unwrap()
        .modified()
        .unwrap();
    let second = sync.sync(&aqua()).await;

    assert_eq!(second.sticker, AssetOutcome::Fresh);
    assert_eq!(second.wallpaper, AssetOutcome::Fresh);
    assert_eq!(server.hits(STICKER_PATH), 1);
    assert_eq!(server.hits(WALLPAPER_PATH), 1);
    assert_eq!(
        first.sticker_url.split('?').next(),
        second.sticker_url.split('?').next()
    );
    let modified_after = std::fs::metadata(root.path().join("stickers/happy/aqua.png"))
        .unwrap()
        .modified()
        .unwrap();
    assert_eq!(modified, modified_after);
}

#[tokio::test]
async fn checksum_500_for_sticker_is_isolated() {
    let server = AssetServer::start();
    server.publish(STICKER_PATH, b"sticker");
    server.fail(&format!("{}.checksum.txt", STICKER_PATH), 500);
    server.publish(WALLPAPER_PATH, b"wallpaper");
    let root = tempdir().unwrap();

    let result = engine(&server, root.path()).sync(&aqua()).await;

    assert_eq!(result.sticker, AssetOutcome::Fresh);
    assert_eq!(result.wallpaper, AssetOutcome::Installed);
    assert_eq!(server.hits(STICKER_PATH), 0);
    assert!(!root.path().join("stickers/happy/aqua.png").exists());
    assert_eq!(
        std::fs::read(root.path().join("wallpapers/aqua")).unwrap(),
        b"wallpaper"
    );
}

#[tokio::test]
async fn failed_download_keeps_previous_copy() {
    let server = AssetServer::start();
    server.publish(STICKER_PATH, b"sticker v1");
    server.publish(WALLPAPER_PATH, b"wallpaper v1");
    let root = tempdir().unwrap();
    let sync = engine(&server, root.path());
    sync.sync(&aqua()).await;

    server.publish(STICKER_PATH, b"sticker v2");
    server.fail(STICKER_PATH, 500);
    let result = sync.sync(&aqua()).await;

    assert_eq!(result.sticker, AssetOutcome::InstallFailed);
    assert_eq!(
        std::fs::read(root.path().join("stickers/happy/aqua.png")).unwrap(),
        b"sticker v1"
    );
}

#[tokio::test]
async fn reserved_characters_map_to_encoded_paths() {
    let server = AssetServer::start();
    server.publish("/stickers/vscode/re%20zero/rem%20%28maid%29.png", b"rem");
    server.publish("/backgrounds/wallpapers/rem%27s", b"rem wallpaper");
    let root = tempdir().unwrap();
    let identity = AssetIdentity::new("/re zero/rem (maid).png", "rem's");

    let result = engine(&server, root.path()).sync(&identity).await;

    assert_eq!(result.sticker, AssetOutcome::Installed);
    assert_eq!(result.wallpaper, AssetOutcome::Installed);
    assert!(root
        .path()
        .join("stickers/re%20zero/rem%20%28maid%29.png")
        .exists());
    assert!(root.path().join("wallpapers/rem%27s").exists());
    assert!(result.sticker_url.contains("re%2520zero/rem%2520%2528maid%2529.png?time="));
}

#[tokio::test]
async fn unreachable_server_leaves_cache_alone() {
    let root = tempdir().unwrap();
    let source: Arc<dyn RemoteSource> = Arc::new(CurlSource::new(HttpOptions {
        connect_timeout_secs: 2,
        timeout_secs: 2,
    }));
    let sync = AssetSync::new(
        source,
        Endpoints {
            sticker: "http://127.0.0.1:1/stickers".into(),
            wallpaper: "http://127.0.0.1:1/wallpapers".into(),
        },
        root.path(),
        ChecksumAlgorithm::Md5,
    );

    let result = sync.sync(&aqua()).await;

    assert_eq!(result.sticker, AssetOutcome::Fresh);
    assert_eq!(result.wallpaper, AssetOutcome::Fresh);
    assert!(!root.path().join("stickers").exists());
}
