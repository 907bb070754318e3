//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::scheme;

/// logtrail - Date-partitioned plain-text log sessions.
#[derive(Debug, Parser)]
#[command(name = "logtrail")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory of the log tree
    #[arg(
        short,
        long,
        global = true,
        env = "LOGTRAIL_BASE",
        default_value = scheme::DEFAULT_BASE
    )]
    pub base: String,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt; missing inputs become errors
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a log session: append entries, close, optionally archive
    Write(WriteArgs),

    /// List the logs of a date partition and open the latest one
    View(ViewArgs),

    /// Delete a log file by date path and file name
    Delete(DeleteArgs),

    /// Move a log file to another folder
    Move(MoveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `write` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WriteArgs {
    /// Entry to append (repeatable, appended in order)
    #[arg(short, long = "message", value_name = "TEXT")]
    pub messages: Vec<String>,

    /// Read additional entries from stdin, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Copy the log into the Archive tree after closing
    #[arg(long)]
    pub archive: bool,
}

/// Arguments for the `view` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ViewArgs {
    /// Date partition to inspect, e.g. 2025/Oct/28
    pub date_path: Option<String>,

    /// List only; do not open the latest log in a viewer
    #[arg(long)]
    pub no_open: bool,

    /// Output the listing as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DeleteArgs {
    /// Date partition of the file, e.g. 2025/Oct/28
    pub date_path: Option<String>,

    /// Log file name, e.g. log_12-34-56.txt
    pub file_name: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the `move` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct MoveArgs {
    /// Date partition of the file, e.g. 2025/Oct/28
    pub date_path: Option<String>,

    /// Log file name, e.g. log_12-34-56.txt
    pub file_name: Option<String>,

    /// Destination folder, created if absent
    pub destination: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
