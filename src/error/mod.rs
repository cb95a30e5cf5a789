//! Error types and handling for chart loading
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`archive`]: Compressed archive errors
//! - [`chart`]: Chart content and structure errors
//! - [`fs`]: File system errors

pub mod archive;
pub mod chart;
pub mod fs;

pub use archive::{empty as empty_archive, format as format_error};
pub use chart::{
    dependency_failed, missing_metadata, structure as structure_error, unsupported_format,
};
pub use fs::io_error;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for chart loading operations
#[derive(Error, Diagnostic, Debug)]
pub enum ChartError {
    #[error("Failed to access {path}: {source}")]
    #[diagnostic(code(chartloader::fs::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid format: {message}")]
    #[diagnostic(code(chartloader::archive::format))]
    Format { message: String },

    #[error("{path} is illegal as of 2.0.0-alpha.2")]
    #[diagnostic(
        code(chartloader::chart::unsupported_format),
        help("Convert the file to values.yaml")
    )]
    UnsupportedFormat { path: String },

    #[error("no files in chart archive")]
    #[diagnostic(code(chartloader::archive::empty))]
    EmptyArchive,

    #[error("chart metadata (Chart.yaml) missing")]
    #[diagnostic(
        code(chartloader::chart::missing_metadata),
        help("Every chart needs a Chart.yaml with a non-empty name")
    )]
    MissingMetadata,

    #[error("{message}")]
    #[diagnostic(code(chartloader::chart::structure))]
    Structure { message: String },

    #[error("error unpacking {dependency} in {chart}: {source}")]
    #[diagnostic(code(chartloader::chart::dependency))]
    Dependency {
        chart: String,
        dependency: String,
        #[source]
        source: Box<ChartError>,
    },
}

/// Classification of a [`ChartError`] by root cause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
    UnsupportedFormat,
    EmptyArchive,
    MissingMetadata,
    Structure,
}

impl ChartError {
    /// Kind of the underlying fault, looking through dependency context
    pub fn kind(&self) -> ErrorKind {
        match self.root_cause() {
            Self::Io { .. } => ErrorKind::Io,
            Self::Format { .. } => ErrorKind::Format,
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::EmptyArchive => ErrorKind::EmptyArchive,
            Self::MissingMetadata => ErrorKind::MissingMetadata,
            Self::Structure { .. } | Self::Dependency { .. } => ErrorKind::Structure,
        }
    }

    /// The innermost error, skipping every `Dependency` wrapper
    pub fn root_cause(&self) -> &ChartError {
        let mut current = self;
        while let Self::Dependency { source, .. } = current {
            current = source;
        }
        current
    }

    /// Names of the nested charts the error travelled through, outermost first
    pub fn dependency_chain(&self) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut current = self;
        while let Self::Dependency {
            dependency, source, ..
        } = current
        {
            chain.push(dependency.as_str());
            current = source;
        }
        chain
    }
}

impl From<serde_yaml::Error> for ChartError {
    fn from(err: serde_yaml::Error) -> Self {
        ChartError::Format {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ChartError>;
