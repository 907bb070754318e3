//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Interactive prompting lives in
//! this layer: a command collects any path components the user did not
//! pass as arguments, then calls into the session/ops core with fully
//! parsed values.

pub mod completions;
pub mod delete;
pub mod dispatcher;
pub mod relocate;
pub mod view;
pub mod write;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::error::Result;
use crate::ui::UserInterface;

/// Use a supplied argument, or collect the component interactively.
pub(crate) fn component_or_prompt(
    ui: &mut dyn UserInterface,
    value: Option<&str>,
    key: &str,
    question: &str,
) -> Result<String> {
    match value {
        Some(v) => Ok(v.to_string()),
        None => ui.input(key, question),
    }
}
