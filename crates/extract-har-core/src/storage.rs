//! Disk I/O for extracted resources: output directory setup and whole-file writes.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Create `dir` (and any missing parents) unless it already exists as a directory.
pub fn ensure_output_dir(dir: &Path) -> std::io::Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}

/// Write `data` to `path`, creating the file or truncating an existing one.
pub fn write_resource(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to open for writing: {}", path.display()))?;
    file.write_all(data)
        .with_context(|| format!("short write: {} bytes to {}", data.len(), path.display()))?;
    file.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
