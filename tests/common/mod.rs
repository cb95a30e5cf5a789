//! Common test utilities for chartloader integration tests

use std::path::PathBuf;

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

/// A temporary directory to lay out charts in
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write every file of `files` below `dir`
    #[allow(dead_code)]
    pub fn write_chart(&self, dir: &str, files: &[(&str, &[u8])]) -> PathBuf {
        for (name, data) in files {
            self.write_file(&format!("{dir}/{name}"), data);
        }
        self.path.join(dir)
    }

    /// Path below the workspace root
    #[allow(dead_code)]
    pub fn join(&self, path: &str) -> PathBuf {
        self.path.join(path)
    }
}

/// Build a gzip'd tar archive whose members all live under `root/`
#[allow(dead_code)]
pub fn chart_archive(root: &str, files: &[(&str, &[u8])]) -> Vec<u8> {
    let members: Vec<(String, &[u8])> = files
        .iter()
        .map(|(name, data)| (format!("{root}/{name}"), *data))
        .collect();
    let members: Vec<(&str, &[u8])> = members.iter().map(|(n, d)| (n.as_str(), *d)).collect();
    raw_archive(&members)
}

/// Build a gzip'd tar archive with exactly the given member paths
pub fn raw_archive(files: &[(&str, &[u8])]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, data) in files {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Regular);
        header.set_mode(0o644);
        header.set_size(data.len() as u64);
        builder
            .append_data(&mut header, name, *data)
            .expect("Failed to append archive member");
    }
    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish gzip stream")
}

/// Build a gzip'd tar archive holding only directory members
#[allow(dead_code)]
pub fn directories_only_archive(dirs: &[&str]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for dir in dirs {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Directory);
        header.set_mode(0o755);
        header.set_size(0);
        builder
            .append_data(&mut header, dir, std::io::empty())
            .expect("Failed to append directory");
    }
    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish gzip stream")
}
