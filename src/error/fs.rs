//! File system errors

use super::ChartError;

/// Creates an IO error for the given path
pub fn io_error(path: impl Into<String>, source: std::io::Error) -> ChartError {
    ChartError::Io {
        path: path.into(),
        source,
    }
}
