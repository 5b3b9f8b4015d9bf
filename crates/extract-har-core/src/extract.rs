//! Per-entry extraction: one `log.entries[i]` object in, at most one file out.

use std::path::{Path, PathBuf};

use crate::error::SkipReason;
use crate::tree::JsonNode;
use crate::{filename, json_path, mime, payload, storage};

/// HAR field paths read from each entry, relative to the entry object.
pub mod fields {
    pub const URL: &str = "request.url";
    pub const MIME_TYPE: &str = "response.content.mimeType";
    pub const ENCODING: &str = "response.content.encoding";
    pub const TEXT: &str = "response.content.text";
    pub const CONTENT_SIZE: &str = "response.content.size";
    pub const BODY_SIZE: &str = "response.bodySize";
}

/// A resource written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub path: PathBuf,
    pub bytes_written: usize,
}

/// Extracts a single HAR entry into `output_dir`.
///
/// Checks run in a fixed order and the first failing one decides the
/// [`SkipReason`]. `response.content.size` must be an integer but is not
/// compared with the decoded length.
pub fn extract_entry(entry: &JsonNode, output_dir: &Path) -> Result<Extracted, SkipReason> {
    let url = json_path::resolve_str(entry, fields::URL).ok_or(SkipReason::MissingUrl)?;

    let mime_type =
        json_path::resolve_str(entry, fields::MIME_TYPE).ok_or(SkipReason::MissingMimeType)?;
    let extension = mime::extension_for(mime_type)
        .ok_or_else(|| SkipReason::UnsupportedMimeType(mime_type.to_string()))?;

    let encoding = json_path::resolve_str(entry, fields::ENCODING);
    let text = json_path::resolve_str(entry, fields::TEXT).ok_or(SkipReason::MissingText)?;

    let content_size = json_path::resolve_i64(entry, fields::CONTENT_SIZE).ok_or(
        SkipReason::InvalidSize {
            field: fields::CONTENT_SIZE,
        },
    )?;
    let body_size =
        json_path::resolve_i64(entry, fields::BODY_SIZE).ok_or(SkipReason::InvalidSize {
            field: fields::BODY_SIZE,
        })?;
    if body_size == 0 {
        return Err(SkipReason::EmptyBody);
    }

    let path = filename::output_path(output_dir, filename::stem(url), extension);
    let data = payload::decode(text, encoding)?;
    tracing::debug!(
        url,
        mime_type,
        encoding = encoding.unwrap_or(payload::DEFAULT_ENCODING),
        content_size,
        body_size,
        decoded = data.len(),
        "decoded entry payload"
    );

    storage::write_resource(&path, &data).map_err(|error| SkipReason::Write {
        path: path.clone(),
        error,
    })?;

    Ok(Extracted {
        path,
        bytes_written: data.len(),
    })
}
