//! Entry line formatting.
//!
//! Every line in a log file has the shape `[HH:MM:SS] <message>`. The
//! session synthesizes two system entries of its own: one when the file is
//! opened and one when it is closed.

use chrono::NaiveDateTime;

use crate::scheme;

/// Message of the synthesized final entry.
pub const CLOSE_MESSAGE: &str = "[SYSTEM] Log closed.";

/// Format one entry line (without the trailing newline).
///
/// The timestamp is the wall-clock instant of the write, not the instant
/// that named the file — a long-lived session keeps its file name while
/// entry timestamps advance.
pub fn format_entry(instant: NaiveDateTime, message: &str) -> String {
    format!("[{}] {}", scheme::entry_timestamp(instant), message)
}

/// Message of the synthesized first entry, recording the initialization
/// instant in full.
pub fn init_message(instant: NaiveDateTime) -> String {
    format!(
        "[SYSTEM] Log initialized at {}",
        instant.format("%Y-%m-%d %H:%M:%S")
    )
}
