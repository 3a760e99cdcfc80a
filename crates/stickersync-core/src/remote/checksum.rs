//! Fetching the published digest of a remote asset.

use std::sync::Arc;

use super::{get_blocking, RemoteSource};
use crate::checksum::Checksum;
use crate::error::SyncError;

/// Suffix of the sidecar resource holding an asset's digest.
pub const CHECKSUM_SUFFIX: &str = ".checksum.txt";

/// URL of the checksum sidecar for `asset_url`.
pub fn checksum_url(asset_url: &str) -> String {
    format!("{}{}", asset_url, CHECKSUM_SUFFIX)
}

/// Fetches `<asset_url>.checksum.txt` and returns its body as the digest.
///
/// Surrounding whitespace (trailing newline from the server) is stripped;
/// the digest itself is returned as published.
pub async fn fetch_remote_checksum(
    source: &Arc<dyn RemoteSource>,
    asset_url: &str,
) -> Result<Checksum, SyncError> {
    let url = checksum_url(asset_url);
    tracing::info!("fetching resource checksum: {}", url);
    let body = get_blocking(source, &url).await?;
    let text = String::from_utf8(body).map_err(|_| SyncError::InvalidChecksum { url })?;
    Ok(Checksum::from_hex(text.trim()))
}
