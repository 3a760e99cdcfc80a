//! Remote asset access over HTTP.
//!
//! `RemoteSource` is the seam between the sync engine and the network:
//! `CurlSource` performs real GETs with libcurl, tests substitute an
//! in-memory source. Implementations are blocking; async callers go through
//! `get_blocking`.

mod checksum;
mod curl_source;

use std::sync::Arc;

use crate::error::SyncError;

pub use checksum::{checksum_url, fetch_remote_checksum, CHECKSUM_SUFFIX};
pub use curl_source::{CurlSource, HttpOptions};

/// Full-body GET of a remote resource.
pub trait RemoteSource: Send + Sync {
    /// Returns the complete response body. Fails on transport errors and
    /// non-2xx statuses.
    fn get(&self, url: &str) -> Result<Vec<u8>, SyncError>;
}

/// Runs `source.get(url)` on the blocking pool.
pub async fn get_blocking(source: &Arc<dyn RemoteSource>, url: &str) -> Result<Vec<u8>, SyncError> {
    let source = Arc::clone(source);
    let url = url.to_string();
    tokio::task::spawn_blocking(move || source.get(&url)).await?
}
