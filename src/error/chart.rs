//! Chart content and structure errors

use super::ChartError;

/// Creates an error for a rejected legacy file format
pub fn unsupported_format(path: impl Into<String>) -> ChartError {
    ChartError::UnsupportedFormat { path: path.into() }
}

/// Creates an error for a chart without usable metadata
pub fn missing_metadata() -> ChartError {
    ChartError::MissingMetadata
}

/// Creates a structural error
pub fn structure(message: impl Into<String>) -> ChartError {
    ChartError::Structure {
        message: message.into(),
    }
}

/// Wraps a nested chart failure with the parent and dependency names
pub fn dependency_failed(
    chart: impl Into<String>,
    dependency: impl Into<String>,
    source: ChartError,
) -> ChartError {
    ChartError::Dependency {
        chart: chart.into(),
        dependency: dependency.into(),
        source: Box::new(source),
    }
}
