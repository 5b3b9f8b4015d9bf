use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// User preferences loaded from `~/.config/extract_har/config.toml`.
///
/// Only affects what is printed; the MIME and encoding allow-lists are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Print one line per written resource.
    #[serde(default = "default_true")]
    pub print_written: bool,
    /// Print one line per skipped entry with the reason.
    #[serde(default)]
    pub print_skipped: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            print_written: true,
            print_skipped: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("extract_har")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<ExtractConfig> {
    load_or_init_at(&config_path()?)
}

/// Load configuration from `path`; write and return the defaults when it is missing.
pub fn load_or_init_at(path: &Path) -> Result<ExtractConfig> {
    match fs::read_to_string(path) {
        Ok(data) => toml::from_str(&data).with_context(|| format!("parse {}", path.display())),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let cfg = ExtractConfig::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, toml::to_string_pretty(&cfg)?)
                .with_context(|| format!("write default config {}", path.display()))?;
            tracing::info!("created default config at {}", path.display());
            Ok(cfg)
        }
        Err(err) => Err(err).with_context(|| format!("read {}", path.display())),
    }
}
