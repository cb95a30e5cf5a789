//! Named byte blobs read from a chart source

use crate::path_utils;

/// A file read from an archive or directory, before classification
///
/// `path` is slash-separated and relative to the chart root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: String,
    pub data: Vec<u8>,
}

impl Entry {
    /// Create an entry, normalizing path separators
    pub fn new(path: impl AsRef<str>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path_utils::normalize_separators(path.as_ref()),
            data: data.into(),
        }
    }
}
