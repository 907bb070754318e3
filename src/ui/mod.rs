//! Terminal user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for scripted/headless environments
//! - [`MockUI`] for tests
//!
//! Commands talk to the world only through this trait: every operation's
//! outcome — success path, not-found notice, failure reason — goes through
//! it, since printed outcomes are the only feedback channel the file
//! operations have.

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask for one line of free-text input.
    ///
    /// `key` identifies the prompt for scripted responses (mocks).
    fn input(&mut self, key: &str, question: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, key: &str, question: &str, default: bool) -> Result<bool>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
