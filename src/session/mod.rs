//! Log session lifecycle.
//!
//! A [`LogSession`] owns one append-mode handle to one date-partitioned log
//! file at a time and walks a three-state lifecycle:
//!
//! ```text
//! Uninitialized ──initialize──▶ Open ──close──▶ Closed
//! ```
//!
//! `append` on an uninitialized session initializes it first (lazy start),
//! and `close` is idempotent. Archiving works in either the Open or Closed
//! state — the current file path survives `close` — and copies the file
//! byte-for-byte into the mirrored `Archive` tree.
//!
//! Sessions are independent: a process may hold one per subsystem (AGV,
//! Battery, System), each bound to its own base directory. There is no
//! internal locking; `&mut self` on every mutating method means the borrow
//! checker enforces single-threaded access per instance.

pub mod entry;

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{LogtrailError, Result};
use crate::scheme;

/// Where a session is in its lifecycle.
///
/// `Open` is the only state holding a handle, so the one-handle-per-session
/// invariant is structural rather than checked.
#[derive(Debug)]
enum SessionState {
    Uninitialized,
    Open { path: PathBuf, handle: File },
    Closed { path: PathBuf },
}

/// Outcome of an archive request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    /// The current file was copied into the archive tree.
    Archived { from: PathBuf, to: PathBuf },
    /// The session was never initialized, so there is nothing to copy.
    NothingToArchive,
}

/// One append-only log stream bound to a base directory.
pub struct LogSession {
    base: PathBuf,
    state: SessionState,
}

impl LogSession {
    /// Create a session for the given base directory.
    ///
    /// A blank or whitespace-only base falls back to
    /// [`scheme::DEFAULT_BASE`]. No filesystem activity happens until
    /// [`initialize`](Self::initialize) or the first
    /// [`append`](Self::append).
    pub fn new(base: &str) -> Self {
        let base = base.trim();
        let base = if base.is_empty() {
            scheme::DEFAULT_BASE
        } else {
            base
        };
        Self {
            base: PathBuf::from(base),
            state: SessionState::Uninitialized,
        }
    }

    /// The base directory this session partitions under.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path of the file currently (or last) bound to this session.
    ///
    /// `None` before the first successful initialize; survives `close` so
    /// a just-closed file can still be archived.
    pub fn current_file(&self) -> Option<&Path> {
        match &self.state {
            SessionState::Uninitialized => None,
            SessionState::Open { path, .. } | SessionState::Closed { path } => Some(path),
        }
    }

    /// Whether the session currently holds an open write handle.
    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open { .. })
    }

    /// Initialize against the current wall clock.
    pub fn initialize(&mut self) -> Result<PathBuf> {
        self.initialize_at(Local::now().naive_local())
    }

    /// Initialize at a specific instant.
    ///
    /// Captures the instant once, derives the partition folder and file name
    /// from it, creates the folder tree, opens the file in append mode, and
    /// writes the synthesized initialization entry. On directory or open
    /// failure the session stays in its previous state and the error is
    /// returned; the caller may retry.
    ///
    /// Re-initializing an Open session releases the previous handle first,
    /// preserving the one-handle invariant. With a new instant this binds a
    /// new file; within the same second it re-opens (and appends to) the
    /// same one.
    pub fn initialize_at(&mut self, instant: NaiveDateTime) -> Result<PathBuf> {
        let folder = scheme::partition_folder(&self.base, instant);
        fs::create_dir_all(&folder).map_err(|source| LogtrailError::Initialization {
            path: folder.clone(),
            source,
        })?;

        let path = folder.join(scheme::file_name(instant));
        let handle = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogtrailError::Initialization {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), "log file opened");
        self.state = SessionState::Open {
            path: path.clone(),
            handle,
        };
        self.write_line(&entry::init_message(instant), instant)?;
        Ok(path)
    }

    /// Append one entry using the current wall clock.
    pub fn append(&mut self, message: &str) -> Result<()> {
        self.append_at(message, Local::now().naive_local())
    }

    /// Append one entry at a specific instant.
    ///
    /// An uninitialized session initializes itself first with the same
    /// instant, so the file carries the initialization entry before this
    /// one. Each entry is flushed before returning. A write failure leaves
    /// the session Open; a closed session reports a write failure rather
    /// than silently reopening.
    pub fn append_at(&mut self, message: &str, instant: NaiveDateTime) -> Result<()> {
        if matches!(self.state, SessionState::Uninitialized) {
            self.initialize_at(instant)?;
        }
        self.write_line(message, instant)
    }

    /// Close the session using the current wall clock.
    pub fn close(&mut self) -> Result<()> {
        self.close_at(Local::now().naive_local())
    }

    /// Close the session, stamping the final entry with `instant`.
    ///
    /// Writes the synthesized closing entry, flushes, releases the handle,
    /// and transitions to Closed. Idempotent: closing an uninitialized or
    /// already-closed session is a no-op and writes nothing.
    pub fn close_at(&mut self, instant: NaiveDateTime) -> Result<()> {
        if !self.is_open() {
            return Ok(());
        }
        self.write_line(entry::CLOSE_MESSAGE, instant)?;

        if let SessionState::Open { path, handle } =
            std::mem::replace(&mut self.state, SessionState::Uninitialized)
        {
            drop(handle);
            tracing::info!(path = %path.display(), "log file closed");
            self.state = SessionState::Closed { path };
        }
        Ok(())
    }

    /// Copy the session's file into the mirrored archive tree.
    ///
    /// Works in the Open or Closed state. The source is left untouched and
    /// the copy is byte-for-byte. On I/O failure a partially written
    /// destination may remain — there is no rollback. Before any initialize
    /// this reports [`ArchiveOutcome::NothingToArchive`] and touches no
    /// files.
    pub fn archive(&self) -> Result<ArchiveOutcome> {
        let Some(path) = self.current_file() else {
            tracing::warn!("no log file to archive");
            return Ok(ArchiveOutcome::NothingToArchive);
        };

        let dest = scheme::archive_path(path)?;
        let copy_err = |source| LogtrailError::Archive {
            from: path.to_path_buf(),
            to: dest.clone(),
            source,
        };
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(copy_err)?;
        }
        fs::copy(path, &dest).map_err(copy_err)?;

        tracing::info!(from = %path.display(), to = %dest.display(), "log archived");
        Ok(ArchiveOutcome::Archived {
            from: path.to_path_buf(),
            to: dest,
        })
    }

    /// Write one formatted entry line and flush it.
    fn write_line(&mut self, message: &str, instant: NaiveDateTime) -> Result<()> {
        match &mut self.state {
            SessionState::Open { path, handle } => {
                writeln!(handle, "{}", entry::format_entry(instant, message))
                    .and_then(|()| handle.flush())
                    .map_err(|source| LogtrailError::Write {
                        path: path.clone(),
                        source,
                    })
            }
            SessionState::Uninitialized => Err(LogtrailError::Write {
                path: self.base.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotConnected,
                    "session is not initialized",
                ),
            }),
            SessionState::Closed { path } => Err(LogtrailError::Write {
                path: path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotConnected, "session is closed"),
            }),
        }
    }
}
