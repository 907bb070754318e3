//! logtrail - Date-partitioned plain-text log sessions.
//!
//! logtrail writes timestamped text entries to files laid out by date
//! (`<base>/<YYYY>/<Mon>/<DD>/log_<HH-MM-SS>.txt`) and manages those files
//! afterwards: archiving into a mirrored `Archive` tree, deleting, and
//! moving.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ops`] - Session-independent file operations (delete, move, browse)
//! - [`scheme`] - Pure date-partition path derivation
//! - [`session`] - The log session lifecycle and write handle
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```no_run
//! use logtrail::session::LogSession;
//!
//! let mut session = LogSession::new("Logs/AGV");
//! session.append("AGV#1 picked up Box#A1 from Entry point.")?;
//! session.close()?;
//! session.archive()?;
//! # Ok::<(), logtrail::LogtrailError>(())
//! ```

pub mod cli;
pub mod error;
pub mod ops;
pub mod scheme;
pub mod session;
pub mod ui;

pub use error::{LogtrailError, Result};
pub use session::LogSession;
