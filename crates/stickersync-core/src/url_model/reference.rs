//! `file://` reference URLs handed to the display layer.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use super::encode_path;

const RADIX32_DIGITS: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// Builds a `file://` URL for `local_path` with a `?time=` cache-busting
/// query taken from the current clock.
pub fn to_reference_url(local_path: &Path) -> String {
    to_reference_url_at(local_path, SystemTime::now())
}

/// Like `to_reference_url` with an explicit timestamp.
pub fn to_reference_url_at(local_path: &Path, at: SystemTime) -> String {
    let millis = at
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    format!(
        "file://{}?time={}",
        encode_path(&local_path.to_string_lossy()),
        radix32(millis)
    )
}

/// Lowercase base-32 rendering of `n` (digits `0-9a-v`).
fn radix32(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::with_capacity(13);
    while n > 0 {
        out.push(RADIX32_DIGITS[(n % 32) as usize]);
        n /= 32;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
