//! Reading gzip-compressed tar chart archives
//!
//! Every file in a chart archive lives under one top-level directory named
//! after the chart. That first path segment is stripped so the returned
//! entries are relative to the chart root.

use std::io::Read;

use flate2::read::GzDecoder;
use tracing::trace;

use super::classify::CHART_FILE;
use super::entry::Entry;
use crate::error::{self, Result};
use crate::path_utils;

/// Decompress and read all file entries of a chart archive
///
/// Directory entries and pax global headers are skipped. Fails if the stream
/// is not a valid gzip'd tar, if `Chart.yaml` sits at the top level instead of
/// inside the chart directory, or if the archive holds no files at all.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<Entry>> {
    let mut archive = tar::Archive::new(GzDecoder::new(reader));
    let items = archive
        .entries()
        .map_err(|e| error::format_error(format!("failed to read chart archive: {e}")))?;

    let mut entries = Vec::new();
    for item in items {
        let mut item =
            item.map_err(|e| error::format_error(format!("failed to read chart archive: {e}")))?;

        let entry_type = item.header().entry_type();
        if entry_type.is_dir() || entry_type.is_pax_global_extensions() {
            continue;
        }

        let raw = path_utils::normalize_separators(&String::from_utf8_lossy(&item.path_bytes()));
        if raw.ends_with('/') {
            continue;
        }

        let (root, rest) = path_utils::split_first_segment(&raw);
        if root == CHART_FILE {
            return Err(error::structure_error("chart yaml not in base directory"));
        }
        let name = rest.unwrap_or_default().to_string();

        let mut data = Vec::new();
        item.read_to_end(&mut data).map_err(|e| {
            error::format_error(format!("failed to read {raw} from chart archive: {e}"))
        })?;

        trace!(path = %name, size = data.len(), "read archive entry");
        entries.push(Entry::new(name, data));
    }

    if entries.is_empty() {
        return Err(error::empty_archive());
    }
    Ok(entries)
}
