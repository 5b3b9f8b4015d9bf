//! Error types for HAR loading, payload decoding and per-entry skips.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that stop the whole run.
#[derive(Debug, Error)]
pub enum HarError {
    #[error("cannot read HAR file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse HAR file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid HAR: expected key 'log.entries'")]
    MissingEntries,

    #[error("invalid HAR: 'log.entries' is not an array")]
    EntriesNotArray,

    #[error("cannot create output directory {path}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to turn a response body into bytes.
///
/// Malformed base64 is tolerated, so the only failure is an encoding tag
/// outside the allow-list.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),
}

/// Why an entry produced no file. None of these abort the run.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("missing request.url")]
    MissingUrl,

    #[error("missing response.content.mimeType")]
    MissingMimeType,

    #[error("unsupported mime type: {0}")]
    UnsupportedMimeType(String),

    #[error("missing response.content.text")]
    MissingText,

    #[error("{field} is missing or not an integer")]
    InvalidSize { field: &'static str },

    #[error("response.bodySize is zero; no data for file in HAR")]
    EmptyBody,

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("cannot write {path}: {error:#}")]
    Write { path: PathBuf, error: anyhow::Error },
}

/// Field-free discriminant of [`SkipReason`], used for tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipKind {
    MissingUrl,
    MissingMimeType,
    UnsupportedMimeType,
    MissingText,
    InvalidSize,
    EmptyBody,
    Undecodable,
    WriteFailed,
}

impl SkipReason {
    pub fn kind(&self) -> SkipKind {
        match self {
            SkipReason::MissingUrl => SkipKind::MissingUrl,
            SkipReason::MissingMimeType => SkipKind::MissingMimeType,
            SkipReason::UnsupportedMimeType(_) => SkipKind::UnsupportedMimeType,
            SkipReason::MissingText => SkipKind::MissingText,
            SkipReason::InvalidSize { .. } => SkipKind::InvalidSize,
            SkipReason::EmptyBody => SkipKind::EmptyBody,
            SkipReason::Payload(_) => SkipKind::Undecodable,
            SkipReason::Write { .. } => SkipKind::WriteFailed,
        }
    }

    /// True for reasons that mean "not an extractable resource" rather than a
    /// problem with an otherwise extractable one.
    pub fn is_filtered(&self) -> bool {
        matches!(
            self.kind(),
            SkipKind::MissingUrl
                | SkipKind::MissingMimeType
                | SkipKind::UnsupportedMimeType
                | SkipKind::MissingText
                | SkipKind::EmptyBody
        )
    }
}
