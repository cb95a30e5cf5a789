//! Convention-based routing of chart entries
//!
//! Each entry path is classified once into an [`EntryKind`]; the assembler
//! only ever matches on the kind.

use crate::path_utils;

/// Chart metadata file
pub const CHART_FILE: &str = "Chart.yaml";
/// Default values file
pub const VALUES_FILE: &str = "values.yaml";
/// Legacy values file, always rejected
pub const LEGACY_VALUES_FILE: &str = "values.toml";
/// Prefix of template files
pub const TEMPLATES_DIR: &str = "templates/";
/// Prefix of nested charts
pub const CHARTS_DIR: &str = "charts/";
/// Extension of a nested chart archive
pub const ARCHIVE_EXT: &str = ".tgz";
/// Extension of a provenance sidecar
pub const PROVENANCE_EXT: &str = ".prov";

/// Role of an entry inside a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind<'a> {
    /// `Chart.yaml`
    Metadata,
    /// `values.toml`
    LegacyValues,
    /// `values.yaml`
    Values,
    /// `templates/...`
    Template,
    /// `charts/...*.prov`, kept as a file of the parent chart
    Provenance,
    /// `charts/.x` or `charts/_x`, dropped
    HiddenDependency,
    /// Member of the nested chart `name`; `path` is relative to `charts/`
    Dependency { name: &'a str, path: &'a str },
    /// Anything else
    File,
}

/// Classify a root-relative entry path
pub fn classify(path: &str) -> EntryKind<'_> {
    match path {
        CHART_FILE => return EntryKind::Metadata,
        LEGACY_VALUES_FILE => return EntryKind::LegacyValues,
        VALUES_FILE => return EntryKind::Values,
        _ => {}
    }

    if path.starts_with(TEMPLATES_DIR) {
        return EntryKind::Template;
    }

    let Some(child) = path.strip_prefix(CHARTS_DIR) else {
        return EntryKind::File;
    };
    if path_utils::extension(path) == PROVENANCE_EXT {
        return EntryKind::Provenance;
    }
    if path_utils::is_hidden_name(child) {
        return EntryKind::HiddenDependency;
    }
    let (name, _) = path_utils::split_first_segment(child);
    EntryKind::Dependency { name, path: child }
}
