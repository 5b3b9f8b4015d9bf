//! Pipeline driver: load a HAR file, walk `log.entries` in order and extract
//! every supported resource into the output directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{HarError, SkipKind, SkipReason};
use crate::extract::{self, Extracted};
use crate::tree::JsonNode;
use crate::{json_path, storage};

/// Path of the entry array inside a HAR document.
pub const ENTRIES_PATH: &str = "log.entries";

/// Outcome of one pipeline run.
#[derive(Debug, Default)]
pub struct ExtractionSummary {
    /// Entries examined, extracted or not.
    pub entries_seen: usize,
    /// Incremented together with `total_extracted`, once per successful write.
    pub total_attempted: usize,
    pub total_extracted: usize,
    /// Written files in entry order. Repeats when entries collide on a name.
    pub written: Vec<PathBuf>,
    pub skipped: BTreeMap<SkipKind, usize>,
}

impl ExtractionSummary {
    /// At least one resource was written.
    pub fn is_success(&self) -> bool {
        self.total_extracted > 0
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    fn record(&mut self, outcome: &Result<Extracted, SkipReason>) {
        self.entries_seen += 1;
        match outcome {
            Ok(extracted) => {
                self.total_attempted += 1;
                self.total_extracted += 1;
                self.written.push(extracted.path.clone());
            }
            Err(reason) => *self.skipped.entry(reason.kind()).or_insert(0) += 1,
        }
    }
}

/// Read and parse a HAR file fully into memory.
///
/// Object members keep document order, duplicates included.
pub fn load_har(path: &Path) -> Result<JsonNode, HarError> {
    let bytes = std::fs::read(path).map_err(|source| HarError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    JsonNode::from_slice(&bytes).map_err(|source| HarError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The `log.entries` array of a parsed HAR document.
pub fn log_entries(har: &JsonNode) -> Result<&[JsonNode], HarError> {
    json_path::resolve(har, ENTRIES_PATH)
        .ok_or(HarError::MissingEntries)?
        .as_array()
        .ok_or(HarError::EntriesNotArray)
}

/// Extract every entry into `output_dir`, creating the directory first.
///
/// `on_entry` sees each entry's index and outcome as it completes; per-entry
/// failures never stop the loop.
pub fn run<F>(
    entries: &[JsonNode],
    output_dir: &Path,
    mut on_entry: F,
) -> Result<ExtractionSummary, HarError>
where
    F: FnMut(usize, &Result<Extracted, SkipReason>),
{
    storage::ensure_output_dir(output_dir).map_err(|source| HarError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut summary = ExtractionSummary::default();
    for (idx, entry) in entries.iter().enumerate() {
        let outcome = extract::extract_entry(entry, output_dir);
        match &outcome {
            Ok(extracted) => tracing::info!(
                idx,
                path = %extracted.path.display(),
                bytes = extracted.bytes_written,
                "extracted resource"
            ),
            Err(SkipReason::MissingUrl) => tracing::warn!(
                "invalid HAR: expected key '{ENTRIES_PATH}[{idx}].{}'",
                extract::fields::URL
            ),
            Err(reason) if reason.is_filtered() => {
                tracing::debug!(idx, %reason, "skipping entry")
            }
            Err(reason) => tracing::warn!(idx, %reason, "skipping entry"),
        }
        on_entry(idx, &outcome);
        summary.record(&outcome);
    }

    tracing::info!(
        entries = summary.entries_seen,
        extracted = summary.total_extracted,
        skipped = summary.skipped_total(),
        "extraction finished"
    );
    Ok(summary)
}

/// Load `input`, then [`run`] over its `log.entries` into `output_dir`.
pub fn extract_file<F>(
    input: &Path,
    output_dir: &Path,
    on_entry: F,
) -> Result<ExtractionSummary, HarError>
where
    F: FnMut(usize, &Result<Extracted, SkipReason>),
{
    let har = load_har(input)?;
    let entries = log_entries(&har)?;
    tracing::debug!(input = %input.display(), entries = entries.len(), "loaded HAR");
    run(entries, output_dir, on_entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn entry(url: &str, mime: &str, text: &str, body_size: i64) -> JsonNode {
        JsonNode::from(json!({
            "request": { "url": url },
            "response": {
                "bodySize": body_size,
                "content": { "mimeType": mime, "size": text.len(), "text": text }
            }
        }))
    }

    #[test]
    fn log_entries_requires_array() {
        let har = JsonNode::from(json!({ "log": { "entries": [ {}, {} ] } }));
        assert_eq!(log_entries(&har).unwrap().len(), 2);

        let har = JsonNode::from(json!({ "log": { "version": "1.2" } }));
        assert!(matches!(log_entries(&har), Err(HarError::MissingEntries)));

        let har = JsonNode::from(json!({ "log": { "entries": {} } }));
        assert!(matches!(log_entries(&har), Err(HarError::EntriesNotArray)));
    }

    #[test]
    fn empty_entries_is_not_success() {
        let out = tempdir().unwrap();
        let summary = run(&[], out.path(), |_, _| {}).unwrap();
        assert_eq!(summary.entries_seen, 0);
        assert!(!summary.is_success());
    }

    #[test]
    fn counts_only_successful_writes() {
        let out = tempdir().unwrap();
        let entries = vec![
            entry("https://a.com/cat.png", "image/png", "hello", 5),
            entry("https://a.com/index.html", "text/html", "<html>", 6),
            entry("https://a.com/empty.png", "image/png", "", 0),
        ];
        let mut seen = Vec::new();
        let summary = run(&entries, out.path(), |idx, outcome| {
            seen.push((idx, outcome.is_ok()))
        })
        .unwrap();

        assert_eq!(seen, vec![(0, true), (1, false), (2, false)]);
        assert_eq!(summary.entries_seen, 3);
        assert_eq!(summary.total_attempted, 1);
        assert_eq!(summary.total_extracted, 1);
        assert_eq!(summary.skipped.get(&SkipKind::UnsupportedMimeType), Some(&1));
        assert_eq!(summary.skipped.get(&SkipKind::EmptyBody), Some(&1));
        assert_eq!(summary.skipped_total(), 2);
        assert!(summary.is_success());
        assert!(!out.path().join("empty.png").exists());
    }

    #[test]
    fn collisions_keep_last_entry() {
        let out = tempdir().unwrap();
        let entries = vec![
            entry("https://a.com/x/logo.png", "image/png", "first", 5),
            entry("https://b.com/y/logo.png", "image/png", "second", 6),
        ];
        let summary = run(&entries, out.path(), |_, _| {}).unwrap();
        assert_eq!(summary.total_extracted, 2);
        assert_eq!(summary.written[0], summary.written[1]);
        assert_eq!(fs::read(out.path().join("logo.png")).unwrap(), b"second");
    }

    #[test]
    fn creates_missing_output_dir() {
        let root = tempdir().unwrap();
        let out = root.path().join("nested").join("imgs");
        let entries = vec![entry("https://a.com/cat.png", "image/png", "hello", 5)];
        let summary = run(&entries, &out, |_, _| {}).unwrap();
        assert!(summary.is_success());
        assert!(out.join("cat.png").is_file());
    }

    #[test]
    fn load_har_reports_read_and_parse_errors() {
        let root = tempdir().unwrap();
        let missing = root.path().join("missing.har");
        assert!(matches!(load_har(&missing), Err(HarError::Read { .. })));

        let garbage = root.path().join("garbage.har");
        fs::write(&garbage, b"{ not json").unwrap();
        assert!(matches!(load_har(&garbage), Err(HarError::Parse { .. })));
    }
}
