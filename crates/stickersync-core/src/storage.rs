//! Local cache file lifecycle.
//!
//! Assets are written to a `.part` sibling, synced, then renamed over the
//! destination, so readers only ever see the previous file or the new one.

use std::io;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::SyncError;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `aqua.png` → `aqua.png.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Ensures every ancestor directory of `path` exists.
///
/// Walks up to the nearest existing ancestor, then creates the missing chain
/// from the top down. Idempotent; a directory created concurrently by someone
/// else is not an error.
pub fn ensure_parent_dirs(path: &Path) -> Result<(), SyncError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };

    let mut missing = Vec::new();
    let mut cursor = Some(parent);
    while let Some(dir) = cursor {
        if dir.as_os_str().is_empty() || dir.is_dir() {
            break;
        }
        missing.push(dir);
        cursor = dir.parent();
    }

    for dir in missing.into_iter().rev() {
        match std::fs::create_dir(dir) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => {}
            Err(e) => return Err(SyncError::io("create directory", dir, e)),
        }
    }
    Ok(())
}

/// Replaces `final_path` with `data`.
///
/// On failure the temp file is removed and `final_path` keeps whatever it
/// held before.
pub async fn write_atomic(final_path: &Path, data: &[u8]) -> Result<(), SyncError> {
    let tmp = temp_path(final_path);
    let res = write_then_rename(&tmp, final_path, data).await;
    if res.is_err() {
        let _ = tokio::fs::remove_file(&tmp).await;
    }
    res
}

async fn write_then_rename(tmp: &Path, final_path: &Path, data: &[u8]) -> Result<(), SyncError> {
    let mut file = tokio::fs::File::create(tmp)
        .await
        .map_err(|e| SyncError::io("create", tmp, e))?;
    file.write_all(data)
        .await
        .map_err(|e| SyncError::io("write", tmp, e))?;
    file.sync_all()
        .await
        .map_err(|e| SyncError::io("sync", tmp, e))?;
    drop(file);

    tokio::fs::rename(tmp, final_path)
        .await
        .map_err(|e| SyncError::io("rename", final_path, e))
}
