//! Downloads a remote asset and installs it at its local cache path.

use std::path::Path;
use std::sync::Arc;

use crate::error::SyncError;
use crate::remote::{get_blocking, RemoteSource};
use crate::storage;

/// Downloads `remote_url` and writes it to `local_path`, replacing any
/// existing file. Returns `true` on success.
///
/// Failures are logged and reported as `false`. The body is fully received
/// before anything is written, so a failed download never touches the
/// previous copy.
pub async fn install(source: &Arc<dyn RemoteSource>, remote_url: &str, local_path: &Path) -> bool {
    match download_remote_asset(source, remote_url, local_path).await {
        Ok(bytes) => {
            tracing::info!(bytes, path = %local_path.display(), "remote asset downloaded");
            true
        }
        Err(e) => {
            tracing::error!(url = remote_url, error = %e, "unable to install asset");
            false
        }
    }
}

async fn download_remote_asset(
    source: &Arc<dyn RemoteSource>,
    remote_url: &str,
    local_path: &Path,
) -> Result<usize, SyncError> {
    storage::ensure_parent_dirs(local_path)?;
    tracing::info!("downloading remote asset: {}", remote_url);
    let body = get_blocking(source, remote_url).await?;
    storage::write_atomic(local_path, &body).await?;
    Ok(body.len())
}
