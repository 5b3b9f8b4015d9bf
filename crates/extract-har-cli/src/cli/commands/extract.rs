//! `extract_har <input_file> <output_dir>` – write every supported image in the HAR to disk.

use anyhow::Result;
use extract_har_core::config::ExtractConfig;
use extract_har_core::pipeline::{self, ExtractionSummary};
use std::path::Path;

/// Run the pipeline over `input`, printing progress lines according to `cfg`.
///
/// Fatal conditions (unreadable or unparsable input, no `log.entries`, output
/// directory not creatable) are returned as errors.
pub fn run_extract(
    input: &Path,
    output_dir: &Path,
    cfg: &ExtractConfig,
) -> Result<ExtractionSummary> {
    let summary = pipeline::extract_file(input, output_dir, |idx, outcome| match outcome {
        Ok(extracted) => {
            if cfg.print_written {
                println!("{}", extracted.path.display());
            }
        }
        Err(reason) => {
            if cfg.print_skipped || !reason.is_filtered() {
                println!("  skipped entry {idx}: {reason}");
            }
        }
    })?;

    if summary.is_success() {
        println!(
            "extracted {} of {} entries into {}",
            summary.total_extracted,
            summary.entries_seen,
            output_dir.display()
        );
    } else {
        println!(
            "no supported resources extracted from {} ({} entries)",
            input.display(),
            summary.entries_seen
        );
    }
    Ok(summary)
}

/// 0 if anything was extracted, 1 otherwise.
pub fn exit_code(summary: &ExtractionSummary) -> i32 {
    if summary.is_success() {
        0
    } else {
        1
    }
}
