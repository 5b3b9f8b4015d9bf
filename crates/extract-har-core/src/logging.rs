//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! Stdout is reserved for the per-file progress lines printed by the CLI, so
//! diagnostics only ever go to the log file or stderr.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Application directory name under the XDG state home.
const APP_DIR: &str = "extract_har";
const LOG_FILE_NAME: &str = "extract_har.log";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,extract_har_core=debug,extract_har=debug";

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log file location below a given state home.
pub fn log_file_path(state_home: &Path) -> PathBuf {
    state_home.join(APP_DIR).join(LOG_FILE_NAME)
}

/// Create the log directory if needed and open the log file for appending.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create log dir {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Initialize structured logging to `~/.local/state/extract_har/extract_har.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::new()?;
    let path = log_file_path(&xdg_dirs.get_state_home());
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("extract_har logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
/// A subscriber that is already installed is left in place.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn log_file_lives_in_app_dir() {
        assert_eq!(
            log_file_path(Path::new("/home/u/.local/state")),
            PathBuf::from("/home/u/.local/state/extract_har/extract_har.log")
        );
    }

    #[test]
    fn open_log_file_creates_dir_and_appends() {
        let state = tempdir().unwrap();
        let path = log_file_path(state.path());

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_log_file_fails_when_dir_is_a_file() {
        let state = tempdir().unwrap();
        fs::write(state.path().join(APP_DIR), b"not a dir").unwrap();
        assert!(open_log_file(&log_file_path(state.path())).is_err());
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn stderr_init_is_idempotent() {
        init_logging_stderr();
        init_logging_stderr();
        tracing::debug!("logging to stderr");
    }
}
