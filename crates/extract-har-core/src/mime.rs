//! MIME type allow-list and file extension mapping.

/// Supported image MIME types and the extension written for each.
///
/// Lookups return the first matching row, so `image/jpeg` always maps to
/// `.jpeg`; the `.jpg` row is never selected.
pub const MIME_EXTENSIONS: &[(&str, &str)] = &[
    ("image/webp", ".webp"),
    ("image/jpeg", ".jpeg"),
    ("image/jpeg", ".jpg"),
    ("image/png", ".png"),
    ("image/svg+xml", ".svg"),
];

/// Returns the file extension (with leading dot) for an exact, case-sensitive
/// MIME type match, or `None` if the type is not extractable.
pub fn extension_for(mime_type: &str) -> Option<&'static str> {
    MIME_EXTENSIONS
        .iter()
        .find(|(name, _)| *name == mime_type)
        .map(|(_, ext)| *ext)
}

/// True if entries with this MIME type are extracted.
pub fn is_extractable(mime_type: &str) -> bool {
    extension_for(mime_type).is_some()
}
