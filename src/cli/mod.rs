//! Command-line interface.
//!
//! Argument definitions live in [`args`], command implementations in
//! [`commands`].

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{Command, CommandDispatcher, CommandResult};
