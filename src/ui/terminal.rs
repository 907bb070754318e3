//! Interactive terminal UI.

use std::io::Write;

use console::{style, Term};

use crate::error::Result;

use super::{prompts, NonInteractiveUI, OutputMode, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{} {}", style("✓").green(), msg).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{} {}", style("!").yellow(), msg).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{} {}", style("✗").red(), msg).ok();
    }

    fn input(&mut self, _key: &str, question: &str) -> Result<String> {
        prompts::input(question, &self.term)
    }

    fn confirm(&mut self, _key: &str, question: &str, default: bool) -> Result<bool> {
        prompts::confirm(question, default, &self.term)
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Create the appropriate UI for the current environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
