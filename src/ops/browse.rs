//! Partition browsing: list logs for a date, pick the latest, open it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// List the `.txt` log files in `base/date_path`, lexicographically sorted.
///
/// A missing partition folder yields an empty list — the date simply has no
/// logs. File names sort the same as their timestamps (zero-padded,
/// fixed-width), so the last element is the most recent log of the day.
pub fn list_partition(base: &Path, date_path: &str) -> Result<Vec<PathBuf>> {
    let folder = base.join(date_path);
    if !folder.is_dir() {
        return Ok(Vec::new());
    }

    let mut logs = Vec::new();
    for dir_entry in fs::read_dir(&folder)? {
        let path = dir_entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "txt") {
            logs.push(path);
        }
    }
    logs.sort();
    Ok(logs)
}

/// The most recent log for a date, if any.
pub fn latest_log(base: &Path, date_path: &str) -> Result<Option<PathBuf>> {
    Ok(list_partition(base, date_path)?.pop())
}

/// Hand a log file to the platform's default viewer.
///
/// The one operation allowed to surface a hard error: it sits outside the
/// file-management core and there is nothing sensible to do locally when
/// the desktop handoff fails.
pub fn open_in_viewer(path: &Path) -> anyhow::Result<()> {
    open::that(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to open log in viewer. You can open it manually:\n  {}\n\nError: {}",
            path.display(),
            e
        )
    })
}
