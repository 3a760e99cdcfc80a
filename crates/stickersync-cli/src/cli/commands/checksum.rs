//! Checksum command: digest of a local file.

use anyhow::Result;
use std::path::Path;
use stickersync_core::checksum::{self, ChecksumAlgorithm};
use stickersync_core::config::SyncConfig;

/// Compute and print the digest of the given file.
pub fn run_checksum(cfg: &SyncConfig, path: &Path, sha256: bool) -> Result<()> {
    let algorithm = if sha256 {
        ChecksumAlgorithm::Sha256
    } else {
        cfg.checksum_algorithm
    };
    let digest = checksum::digest_path(algorithm, path)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
