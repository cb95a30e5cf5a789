//! Chart loading from archives and directories
//!
//! A source is first reduced to a flat list of root-relative [`Entry`] values,
//! by [`archive`] for gzip'd tarballs or by [`directory`] for unpacked charts.
//! The shared assembler then classifies those entries and recursively loads
//! nested charts from `charts/`.
//!
//! ```no_run
//! use chartloader::loader::{self, LoadOptions};
//!
//! let chart = loader::load("./mychart", &LoadOptions::default())?;
//! println!("{} has {} templates", chart.name(), chart.templates.len());
//! # Ok::<(), chartloader::error::ChartError>(())
//! ```

pub mod archive;
mod assemble;
pub mod classify;
pub mod directory;
pub mod entry;
pub mod options;

pub use classify::{EntryKind, classify};
pub use entry::Entry;
pub use options::LoadOptions;

use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::chart::Chart;
use crate::error::{self, Result};

/// Load a chart from a directory or an archive file, depending on what `path` is
pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Chart> {
    let path = path.as_ref();
    let meta =
        fs::metadata(path).map_err(|e| error::io_error(path.display().to_string(), e))?;
    if meta.is_dir() {
        load_dir(path, options)
    } else {
        load_file(path, options)
    }
}

/// Load a chart from a gzip'd tar archive on disk
pub fn load_file(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Chart> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    let meta = fs::metadata(path).map_err(|e| error::io_error(&shown, e))?;
    if meta.is_dir() {
        return Err(error::io_error(
            shown,
            io::Error::new(io::ErrorKind::IsADirectory, "cannot load a directory"),
        ));
    }

    let file = File::open(path).map_err(|e| error::io_error(&shown, e))?;
    debug!(path = %shown, "loading chart archive");
    load_archive(BufReader::new(file), options)
}

/// Load a chart from a stream containing a gzip'd tar archive
pub fn load_archive<R: Read>(reader: R, options: &LoadOptions) -> Result<Chart> {
    let entries = archive::read_entries(reader)?;
    load_entries(entries, options)
}

/// Load a chart from an unpacked chart directory
pub fn load_dir(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Chart> {
    let path = path.as_ref();
    let root =
        std::path::absolute(path).map_err(|e| error::io_error(path.display().to_string(), e))?;
    let shown = root.display().to_string();

    let meta = fs::metadata(&root).map_err(|e| error::io_error(&shown, e))?;
    if !meta.is_dir() {
        return Err(error::io_error(
            shown,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    debug!(path = %shown, "loading chart directory");
    let entries = directory::read_entries(&root, options)?;
    load_entries(entries, options)
}

/// Assemble a chart from entries whose paths are relative to the chart root
pub fn load_entries(entries: Vec<Entry>, options: &LoadOptions) -> Result<Chart> {
    assemble::assemble(entries, options, 0)
}
