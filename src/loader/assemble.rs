//! Assembling classified entries into a chart tree
//!
//! Both sources (archives and directories) end up here as a flat list of
//! root-relative entries. Nested charts found under `charts/` are grouped by
//! name in discovery order and loaded recursively, either from a nested
//! archive or from the directory subtree.

use tracing::{debug, trace};

use super::archive;
use super::classify::{ARCHIVE_EXT, EntryKind, classify};
use super::entry::Entry;
use super::options::LoadOptions;
use crate::chart::{Chart, ChartFile, Metadata, Template};
use crate::error::{self, Result};
use crate::path_utils;

/// Members of one nested chart, paths relative to `charts/`
#[derive(Debug)]
struct DependencyGroup {
    name: String,
    entries: Vec<Entry>,
}

/// Nested chart groups in first-discovery order
#[derive(Debug, Default)]
struct DependencyGroups {
    groups: Vec<DependencyGroup>,
}

impl DependencyGroups {
    fn push(&mut self, name: &str, entry: Entry) {
        match self.groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.entries.push(entry),
            None => self.groups.push(DependencyGroup {
                name: name.to_string(),
                entries: vec![entry],
            }),
        }
    }
}

/// Build a chart from root-relative entries; `depth` is 0 for the top level
pub(crate) fn assemble(entries: Vec<Entry>, options: &LoadOptions, depth: usize) -> Result<Chart> {
    if depth > options.max_depth {
        return Err(error::structure_error(format!(
            "maximum chart nesting depth of {} exceeded",
            options.max_depth
        )));
    }

    let mut metadata: Option<Metadata> = None;
    let mut values = None;
    let mut templates = Vec::new();
    let mut files = Vec::new();
    let mut groups = DependencyGroups::default();

    for entry in entries {
        match classify(&entry.path) {
            EntryKind::Metadata => metadata = Some(Metadata::from_yaml(&entry.data)?),
            EntryKind::LegacyValues => return Err(error::unsupported_format(entry.path)),
            EntryKind::Values => values = Some(entry.data),
            EntryKind::Template => templates.push(Template {
                name: entry.path,
                data: entry.data,
            }),
            EntryKind::Provenance | EntryKind::File => files.push(ChartFile {
                name: entry.path,
                data: entry.data,
            }),
            EntryKind::HiddenDependency => {
                trace!(path = %entry.path, "skipping ignored nested chart entry");
            }
            EntryKind::Dependency { name, path } => {
                let member = Entry::new(path, entry.data);
                groups.push(name, member);
            }
        }
    }

    let metadata = match metadata {
        Some(metadata) if metadata.is_valid() => metadata,
        _ => return Err(error::missing_metadata()),
    };

    let mut chart = Chart::new(metadata);
    chart.values = values;
    chart.templates = templates;
    chart.files = files;

    for group in groups.groups {
        if path_utils::is_hidden_name(&group.name) {
            continue;
        }
        let dependency = load_dependency(chart.name(), group, options, depth + 1)?;
        chart.dependencies.push(dependency);
    }

    debug!(
        chart = %chart.name(),
        depth,
        templates = chart.templates.len(),
        files = chart.files.len(),
        dependencies = chart.dependencies.len(),
        "assembled chart"
    );
    Ok(chart)
}

/// Load one nested chart group, wrapping failures with parent context
fn load_dependency(
    parent: &str,
    group: DependencyGroup,
    options: &LoadOptions,
    depth: usize,
) -> Result<Chart> {
    let DependencyGroup { name, entries } = group;
    debug!(chart = %parent, dependency = %name, depth, "loading nested chart");

    if path_utils::extension(&name) == ARCHIVE_EXT {
        let data = archive_member(parent, &name, entries)?;
        return archive::read_entries(data.as_slice())
            .and_then(|entries| assemble(entries, options, depth))
            .map_err(|e| error::dependency_failed(parent, &name, e));
    }

    // Drop the group's own name from every path; a bare `charts/<name>` file
    // is not part of the nested chart.
    let entries = entries
        .into_iter()
        .filter_map(|entry| match path_utils::split_first_segment(&entry.path) {
            (_, Some(rest)) => Some(Entry::new(rest, entry.data)),
            (_, None) => None,
        })
        .collect();

    assemble(entries, options, depth).map_err(|e| error::dependency_failed(parent, &name, e))
}

/// The single archive file of a `.tgz` group, which must be named exactly like the group
fn archive_member(parent: &str, name: &str, entries: Vec<Entry>) -> Result<Vec<u8>> {
    let mut members = entries.into_iter();
    match (members.next(), members.next()) {
        (Some(member), None) if member.path == name => Ok(member.data),
        (Some(member), _) => Err(error::structure_error(format!(
            "error unpacking tar in {parent}: expected {name}, got {}",
            member.path
        ))),
        (None, _) => Err(error::structure_error(format!(
            "error unpacking tar in {parent}: no entries for {name}"
        ))),
    }
}
