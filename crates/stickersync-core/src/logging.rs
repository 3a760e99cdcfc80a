//! Logging for stickersync: sync decisions go to a file under the XDG state
//! dir, or to stderr when that file cannot be opened.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_DIR: &str = "stickersync";
const LOG_FILE: &str = "stickersync.log";

/// How much the CLI reports about a sync cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only: failed checksum fetches and installs.
    Quiet,
    /// Downloads and per-asset outcomes of each cycle.
    #[default]
    Normal,
    /// Everything, including checksum comparisons and curl transfer sizes.
    Verbose,
}

/// Filter directives used when `RUST_LOG` is unset.
///
/// `Normal` keeps third-party crates at `warn` but shows the per-asset
/// outcome logged by `stickersync_core::sync` at debug level.
pub fn default_directives(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn,stickersync=info,stickersync_core=info,stickersync_core::sync=debug",
        Verbosity::Verbose => "info,stickersync=debug,stickersync_core=debug",
    }
}

fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)))
}

/// `~/.local/state/stickersync/stickersync.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(LOG_DIR)?;
    Ok(xdg_dirs.get_state_home().join(LOG_DIR).join(LOG_FILE))
}

/// Initialize structured logging to the state-dir log file and return its path.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging(verbosity: Verbosity) -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!(?verbosity, "stickersync logging to {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only. Use when `init_logging` fails so the CLI doesn't crash.
pub fn init_logging_stderr(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
