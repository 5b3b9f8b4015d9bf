//! Output filename derivation from a request URL.
//!
//! The URL's own extension is discarded: the written extension always comes
//! from the response MIME type. Two entries with the same stem and type map to
//! the same path and the later one overwrites the earlier.

use std::path::{Path, PathBuf};

/// Last `/`-separated segment of `url` with its final `.suffix` removed.
///
/// - `stem("https://a.com/img/photo.v2.jpg")` → `"photo.v2"`
/// - `stem("logo")` → `"logo"`
/// - `stem("https://a.com/img/")` → `""`
///
/// Query strings and fragments are not special: they are part of the last
/// segment like any other text.
pub fn stem(url: &str) -> &str {
    let last = url.rsplit_once('/').map_or(url, |(_, tail)| tail);
    last.rsplit_once('.').map_or(last, |(head, _)| head)
}

/// `{output_dir}/{stem}{extension}`.
pub fn output_path(output_dir: &Path, stem: &str, extension: &str) -> PathBuf {
    output_dir.join(format!("{stem}{extension}"))
}
