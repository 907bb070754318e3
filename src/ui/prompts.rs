//! Interactive prompts.

use console::Term;
use dialoguer::{Confirm, Input};

use crate::error::{LogtrailError, Result};

/// Convert dialoguer errors to LogtrailError.
fn map_dialoguer_err(e: dialoguer::Error) -> LogtrailError {
    LogtrailError::Io(e.into())
}

/// Prompt for one line of free-text input.
pub fn input(question: &str, term: &Term) -> Result<String> {
    Input::<String>::new()
        .with_prompt(question)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

/// Prompt for a yes/no confirmation.
pub fn confirm(question: &str, default: bool, term: &Term) -> Result<bool> {
    Confirm::new()
        .with_prompt(question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
