//! Test fixtures for building chart archives and directories.
//!
//! ```ignore
//! use crate::test_fixtures::{ArchiveBuilder, create_temp_dir, write_file};
//!
//! let archive = ArchiveBuilder::new()
//!     .file("mychart/Chart.yaml", "name: mychart\n")
//!     .build();
//!
//! let temp = create_temp_dir();
//! write_file(temp.path(), "Chart.yaml", "name: mychart\n");
//! ```

use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a file below `root`, creating parent directories.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write file");
}

/// Gzip arbitrary bytes.
///
/// # Panics
///
/// Panics if compression fails.
#[must_use]
pub fn gzip_bytes(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("Failed to gzip data");
    encoder.finish().expect("Failed to finish gzip stream")
}

enum Member {
    Dir(String),
    File(String, Vec<u8>),
}

/// Builds a gzip'd tar archive in memory, preserving member order
#[derive(Default)]
pub struct ArchiveBuilder {
    members: Vec<Member>,
}

impl ArchiveBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory member
    #[must_use]
    pub fn dir(mut self, path: &str) -> Self {
        self.members.push(Member::Dir(path.to_string()));
        self
    }

    /// Add a regular file member
    #[must_use]
    pub fn file(mut self, path: &str, content: impl AsRef<[u8]>) -> Self {
        self.members
            .push(Member::File(path.to_string(), content.as_ref().to_vec()));
        self
    }

    /// Encode the archive.
    ///
    /// # Panics
    ///
    /// Panics if a member cannot be appended.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for member in self.members {
            let mut header = tar::Header::new_gnu();
            match member {
                Member::Dir(path) => {
                    header.set_entry_type(tar::EntryType::Directory);
                    header.set_mode(0o755);
                    header.set_size(0);
                    builder
                        .append_data(&mut header, path, std::io::empty())
                        .expect("Failed to append directory");
                }
                Member::File(path, data) => {
                    header.set_entry_type(tar::EntryType::Regular);
                    header.set_mode(0o644);
                    header.set_size(data.len() as u64);
                    builder
                        .append_data(&mut header, path, data.as_slice())
                        .expect("Failed to append file");
                }
            }
        }

        builder
            .into_inner()
            .expect("Failed to finish tar stream")
            .finish()
            .expect("Failed to finish gzip stream")
    }
}
