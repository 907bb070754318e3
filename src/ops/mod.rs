//! Session-independent file operations.
//!
//! Delete and move work on historical log files addressed by parsed path
//! components — a base directory, a relative date path such as
//! `2025/Oct/28`, and a file name. They never touch live session state:
//! deleting a file some session still has open is the caller's business.
//!
//! Interactive collection of these components happens in the CLI layer;
//! everything here takes already-validated strings so it is testable
//! without a terminal.
//!
//! A missing target is an *outcome*, not an error, and a move whose copy
//! landed but whose source could not be removed is reported distinctly so
//! the caller knows two copies now exist.

pub mod browse;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Outcome of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The file existed and was removed.
    Deleted { path: PathBuf },
    /// Nothing at the resolved path.
    NotFound { path: PathBuf },
}

/// Outcome of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The file now lives at `to` and is gone from `from`.
    Moved { from: PathBuf, to: PathBuf },
    /// The copy landed but the source could not be removed; both files
    /// exist. Cleanup is best-effort, not atomic.
    CopiedNotRemoved { from: PathBuf, to: PathBuf },
    /// Nothing at the resolved source path.
    NotFound { path: PathBuf },
}

/// Resolve `base/date_path/file_name` without touching the filesystem.
pub fn resolve(base: &Path, date_path: &str, file_name: &str) -> PathBuf {
    base.join(date_path).join(file_name)
}

/// Delete one log file.
///
/// A missing target reports [`DeleteOutcome::NotFound`]; only an actual
/// removal failure (permissions, for instance) is an error.
pub fn delete_log(base: &Path, date_path: &str, file_name: &str) -> Result<DeleteOutcome> {
    let path = resolve(base, date_path, file_name);
    if !path.is_file() {
        return Ok(DeleteOutcome::NotFound { path });
    }
    fs::remove_file(&path)?;
    tracing::info!(path = %path.display(), "log deleted");
    Ok(DeleteOutcome::Deleted { path })
}

/// Move one log file into `destination`, creating it if absent.
///
/// Prefers an atomic rename; when that fails (typically a cross-volume
/// move) it falls back to copy-then-delete. If the fallback copy succeeds
/// but the source removal fails, the outcome is
/// [`MoveOutcome::CopiedNotRemoved`] rather than an error.
pub fn move_log(
    base: &Path,
    date_path: &str,
    file_name: &str,
    destination: &Path,
) -> Result<MoveOutcome> {
    let from = resolve(base, date_path, file_name);
    if !from.is_file() {
        return Ok(MoveOutcome::NotFound { path: from });
    }

    fs::create_dir_all(destination)?;
    let to = destination.join(file_name);

    if fs::rename(&from, &to).is_ok() {
        tracing::info!(from = %from.display(), to = %to.display(), "log moved");
        return Ok(MoveOutcome::Moved { from, to });
    }

    fs::copy(&from, &to)?;
    match fs::remove_file(&from) {
        Ok(()) => {
            tracing::info!(from = %from.display(), to = %to.display(), "log moved (copy+delete)");
            Ok(MoveOutcome::Moved { from, to })
        }
        Err(e) => {
            tracing::warn!(
                from = %from.display(),
                to = %to.display(),
                error = %e,
                "log copied but source not removed"
            );
            Ok(MoveOutcome::CopiedNotRemoved { from, to })
        }
    }
}
