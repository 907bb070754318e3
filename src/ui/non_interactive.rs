//! Non-interactive UI for scripted/headless environments.

use anyhow::anyhow;

use crate::error::Result;

use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Status output goes to stdout and errors to stderr, uncolored. Prompts
/// cannot be answered here: free-text input is an error telling the caller
/// which argument to pass instead, and confirmations resolve to their
/// default.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("warning: {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn input(&mut self, key: &str, _question: &str) -> Result<String> {
        Err(anyhow!(
            "'{}' requires an interactive terminal; pass it as an argument instead",
            key
        )
        .into())
    }

    fn confirm(&mut self, _key: &str, _question: &str, default: bool) -> Result<bool> {
        Ok(default)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
