//! Content digests used to decide whether a cached asset matches the remote.
//!
//! The remote side publishes a plain hex digest next to every asset; two
//! assets are considered identical iff their digests are byte-identical.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::SyncError;

const BUF_SIZE: usize = 64 * 1024;

/// Digest algorithm; must match what the asset server publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumAlgorithm {
    #[default]
    Md5,
    Sha256,
}

/// Lowercase hex digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checksum(String);

impl Checksum {
    /// Wraps an already computed digest string verbatim.
    pub fn from_hex(s: impl Into<String>) -> Self {
        Checksum(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Digest of a local file, or the marker for a file that was never synced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalDigest {
    Present(Checksum),
    NotFound,
}

impl LocalDigest {
    /// True iff the local file exists and its digest equals `remote`.
    pub fn matches(&self, remote: &Checksum) -> bool {
        match self {
            LocalDigest::Present(local) => local == remote,
            LocalDigest::NotFound => false,
        }
    }
}

enum Hasher {
    Md5(md5::Md5),
    Sha256(sha2::Sha256),
}

impl Hasher {
    fn new(algorithm: ChecksumAlgorithm) -> Self {
        use sha2::Digest;
        match algorithm {
            ChecksumAlgorithm::Md5 => Hasher::Md5(md5::Md5::new()),
            ChecksumAlgorithm::Sha256 => Hasher::Sha256(sha2::Sha256::new()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        use sha2::Digest;
        match self {
            Hasher::Md5(h) => h.update(data),
            Hasher::Sha256(h) => h.update(data),
        }
    }

    fn finish(self) -> Checksum {
        use sha2::Digest;
        let hex = match self {
            Hasher::Md5(h) => hex::encode(h.finalize()),
            Hasher::Sha256(h) => hex::encode(h.finalize()),
        };
        Checksum(hex)
    }
}

/// Digest of an in-memory byte sequence.
pub fn digest(algorithm: ChecksumAlgorithm, data: &[u8]) -> Checksum {
    let mut hasher = Hasher::new(algorithm);
    hasher.update(data);
    hasher.finish()
}

/// Digest of the file at `path`, or `NotFound` if it does not exist.
/// Other read failures are returned as errors.
pub async fn digest_of_file(
    algorithm: ChecksumAlgorithm,
    path: &Path,
) -> Result<LocalDigest, SyncError> {
    match tokio::fs::read(path).await {
        Ok(data) => Ok(LocalDigest::Present(digest(algorithm, &data))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(LocalDigest::NotFound),
        Err(e) => Err(SyncError::io("read", path, e)),
    }
}

/// Blocking, chunked digest of a file. Keeps memory bounded for large files.
pub fn digest_path(algorithm: ChecksumAlgorithm, path: &Path) -> anyhow::Result<Checksum> {
    use anyhow::Context;

    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Hasher::new(algorithm);
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finish())
}
