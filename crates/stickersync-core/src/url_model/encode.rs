//! Filesystem-safe URL encoding of asset paths.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped when encoding a path: everything except ASCII alphanumerics
/// and the URI punctuation that `encodeURI` keeps. `! ' ( ) *` are escaped
/// as well; they are legal in URIs but break CSS `url(...)` references.
const PATH_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'#');

/// Encodes `raw` for use both as a remote URL segment and as a local path.
///
/// Backslashes become `/`, then the result is percent-encoded (UTF-8, upper
/// case hex). Pure and deterministic.
pub fn encode_path(raw: &str) -> String {
    let normalized = raw.replace('\\', "/");
    utf8_percent_encode(&normalized, PATH_ESCAPE).to_string()
}
