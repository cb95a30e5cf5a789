//! Reading chart directories
//!
//! The tree is walked in sorted, pre-order fashion. Exclusion rules from the
//! chart's `.helmignore` (plus built-in defaults) decide what is read; an
//! excluded directory is pruned without visiting anything below it.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};
use walkdir::WalkDir;

use super::entry::Entry;
use super::options::LoadOptions;
use crate::error::{self, Result};
use crate::ignore::Rules;
use crate::path_utils;

/// Load the exclusion rules for a chart directory
///
/// The rule file is optional; the defaults always apply.
pub fn load_rules(root: &Path, options: &LoadOptions) -> Result<Rules> {
    let rule_file = root.join(&options.ignore_file);
    let mut rules = if rule_file.exists() {
        debug!(path = %rule_file.display(), "using ignore rules");
        Rules::parse_file(&rule_file)?
    } else {
        Rules::empty()
    };
    rules.add_defaults()?;
    Ok(rules)
}

/// Read every non-excluded file below `root` as a root-relative entry
pub fn read_entries(root: &Path, options: &LoadOptions) -> Result<Vec<Entry>> {
    let rules = load_rules(root, options)?;
    let mut entries = Vec::new();

    let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();
    while let Some(item) = walker.next() {
        let item = item.map_err(|e| {
            let path = e
                .path()
                .map(|p| relative_path(root, p))
                .unwrap_or_default();
            error::io_error(path, e.into())
        })?;

        if item.depth() == 0 {
            continue;
        }

        let relative = relative_path(root, item.path());
        if item.file_type().is_dir() {
            if rules.ignore(&relative, true) {
                debug!(path = %relative, "pruning ignored directory");
                walker.skip_current_dir();
            }
            continue;
        }

        if rules.ignore(&relative, false) {
            trace!(path = %relative, "skipping ignored file");
            continue;
        }

        let data = fs::read(item.path()).map_err(|e| error::io_error(&relative, e))?;
        entries.push(Entry::new(relative, data));
    }

    Ok(entries)
}

fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    path_utils::to_forward_slashes(relative)
}
