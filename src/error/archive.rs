//! Compressed archive errors

use super::ChartError;

/// Creates a format error for undecodable archive or file content
pub fn format(message: impl Into<String>) -> ChartError {
    ChartError::Format {
        message: message.into(),
    }
}

/// Creates an error for an archive that held no file entries
pub fn empty() -> ChartError {
    ChartError::EmptyArchive
}
