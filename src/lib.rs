//! Chartloader - chart package loading
//!
//! Loads a chart from a gzip'd tar archive or an unpacked directory into a
//! [`Chart`] tree carrying metadata, values, templates, opaque files and
//! recursively loaded nested charts.

pub mod chart;
pub mod error;
pub mod ignore;
pub mod loader;
pub mod path_utils;

#[cfg(test)]
mod test_fixtures;

pub use chart::{Chart, ChartFile, Maintainer, Metadata, Template};
pub use error::{ChartError, ErrorKind, Result};
pub use loader::{LoadOptions, load, load_archive, load_dir, load_entries, load_file};
