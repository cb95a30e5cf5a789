//! Path utilities for chart entry names
//!
//! Every entry path handled by the loader is slash-separated and relative to
//! the chart root, whatever the source platform.

use std::path::Path;

/// Convert a path to a string with forward slashes.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use chartloader::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("templates\\a.yaml")), "templates/a.yaml");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    normalize_separators(&path.to_string_lossy())
}

/// Replace backslash separators with forward slashes
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Split a path at its first `/`.
///
/// Returns the first segment and, if present, the remainder.
///
/// ```
/// use chartloader::path_utils::split_first_segment;
///
/// assert_eq!(split_first_segment("a/b/c"), ("a", Some("b/c")));
/// assert_eq!(split_first_segment("a"), ("a", None));
/// ```
pub fn split_first_segment(path: &str) -> (&str, Option<&str>) {
    match path.split_once('/') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

/// Last path segment, the whole path when it has no `/`
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Extension of the last segment including the leading dot, empty when absent.
///
/// Matches the shape of the archive and provenance suffix checks: `foo.tgz`
/// yields `.tgz`, `dir.d/file` yields an empty string.
pub fn extension(path: &str) -> &str {
    let name = base_name(path);
    match name.rfind('.') {
        Some(pos) => &name[pos..],
        None => "",
    }
}

/// Whether a chart name is reserved for ignored nested charts (`.x` or `_x`)
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('_')
}
