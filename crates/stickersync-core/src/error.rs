//! Error type shared by the fetch, checksum and install steps.
//!
//! None of these escape the sync cycle: the staleness check and the installer
//! turn them into booleans after logging. They exist so each step can report
//! what actually went wrong.

use std::io;
use std::path::PathBuf;

/// Failure of a single remote or local operation.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// libcurl reported an error (timeout, connection refused, DNS, ...).
    #[error("GET {url}: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
    /// A checksum sidecar was fetched but its body is not a usable digest.
    #[error("checksum sidecar {url} is not valid UTF-8 text")]
    InvalidChecksum { url: String },
    /// Local filesystem read, write or directory creation failed.
    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A blocking task was cancelled or panicked.
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl SyncError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SyncError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// True for errors raised on the remote side (transport or HTTP status).
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            SyncError::Curl { .. } | SyncError::Http { .. } | SyncError::InvalidChecksum { .. }
        )
    }
}
