//! Error types for logtrail operations.
//!
//! This module defines [`LogtrailError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LogtrailError` for failures that need distinct handling
//! - Use `anyhow::Error` (via `LogtrailError::Other`) for unexpected errors
//! - Conditions the caller must see but that are not faults — a delete
//!   target that does not exist, a move that copied but could not remove
//!   the source — are *outcomes* on the operation's return type, not errors
//! - All errors carry the resolved path so messages are actionable

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for logtrail operations.
#[derive(Debug, Error)]
pub enum LogtrailError {
    /// Directory or file creation failed while starting a session.
    /// The session remains uninitialized; the caller may retry.
    #[error("Failed to initialize log at {path}: {source}")]
    Initialization {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing or flushing an entry failed. The session stays open.
    #[error("Failed to write log entry to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Copying a log into the archive tree failed. The destination may be
    /// partially written; no rollback is attempted.
    #[error("Failed to archive {from} to {to}: {source}")]
    Archive {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// An archive path was requested for a file without the expected
    /// year/month/day ancestry. This is a caller contract violation.
    #[error("Path too shallow to mirror into an archive tree: {path}")]
    ShallowArchivePath { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for logtrail operations.
pub type Result<T> = std::result::Result<T, LogtrailError>;
