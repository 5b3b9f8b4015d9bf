//! CLI for extract_har.

mod commands;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use extract_har_core::config::{self, ExtractConfig};
use std::ffi::OsString;
use std::path::PathBuf;

use commands::{exit_code, run_extract};

/// Extract all picture files from a .har file.
#[derive(Debug, Parser)]
#[command(name = "extract_har", version)]
#[command(about = "extract_har: extract all picture files from a *.har file", long_about = None)]
pub struct Cli {
    /// HAR file to read.
    pub input_file: PathBuf,

    /// Directory for extracted files (created if missing).
    pub output_dir: PathBuf,
}

impl Cli {
    /// Parse process arguments, run the extraction and return the exit code.
    pub fn run_from_args() -> Result<i32> {
        Self::run_from(std::env::args_os())
    }

    /// Parse `args` (program name first), run the extraction and return the exit code.
    ///
    /// Wrong arity prints usage and yields 1 rather than clap's default 2.
    pub fn run_from<I, T>(args: I) -> Result<i32>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.print()?;
                return Ok(0);
            }
            Err(err) => {
                err.print()?;
                return Ok(1);
            }
        };

        let cfg = config::load_or_init().unwrap_or_else(|err| {
            tracing::warn!("using default config: {:#}", err);
            ExtractConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);

        let summary = run_extract(&cli.input_file, &cli.output_dir, &cfg)?;
        Ok(exit_code(&summary))
    }
}
