//! Decides whether a cached asset must be downloaded again.

use std::path::Path;
use std::sync::Arc;

use crate::checksum::{digest_of_file, ChecksumAlgorithm, LocalDigest};
use crate::error::SyncError;
use crate::remote::{fetch_remote_checksum, RemoteSource};

/// True if the remote digest differs from the local file's, including when
/// the local file does not exist yet.
///
/// Fails closed: if the remote checksum cannot be fetched or the local file
/// cannot be read, the error is logged and `false` is returned so the cached
/// copy stays in place.
pub async fn is_stale(
    source: &Arc<dyn RemoteSource>,
    algorithm: ChecksumAlgorithm,
    remote_url: &str,
    local_path: &Path,
) -> bool {
    match compare(source, algorithm, remote_url, local_path).await {
        Ok(stale) => stale,
        Err(e) => {
            tracing::error!(url = remote_url, error = %e, "unable to check for updates");
            false
        }
    }
}

async fn compare(
    source: &Arc<dyn RemoteSource>,
    algorithm: ChecksumAlgorithm,
    remote_url: &str,
    local_path: &Path,
) -> Result<bool, SyncError> {
    let remote = fetch_remote_checksum(source, remote_url).await?;
    let local = digest_of_file(algorithm, local_path).await?;
    if let LocalDigest::Present(ref l) = local {
        tracing::debug!(remote = %remote, local = %l, path = %local_path.display(), "comparing checksums");
    }
    Ok(!local.matches(&remote))
}
