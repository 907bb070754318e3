//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use logtrail::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_input_response("file-name", "log_10-15-30.txt");
//!
//! // Use ui in code under test...
//! ui.message("Resolving log file");
//! ui.success("Deleted");
//!
//! // Assert on captured interactions
//! assert!(ui.messages().contains(&"Resolving log file".to_string()));
//! assert!(ui.successes().contains(&"Deleted".to_string()));
//! ```

use std::collections::HashMap;

use anyhow::anyhow;

use crate::error::Result;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    input_responses: HashMap<String, String>,
    confirm_responses: HashMap<String, bool>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Pre-configure the response for an input prompt key.
    pub fn set_input_response(&mut self, key: &str, response: &str) {
        self.input_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Pre-configure the response for a confirm prompt key.
    pub fn set_confirm_response(&mut self, key: &str, response: bool) {
        self.confirm_responses.insert(key.to_string(), response);
    }

    /// Messages captured so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Success messages captured so far.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Warning messages captured so far.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Error messages captured so far.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Keys of prompts that were shown, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn input(&mut self, key: &str, _question: &str) -> Result<String> {
        self.prompts_shown.push(key.to_string());
        self.input_responses
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow!("no scripted response for prompt '{}'", key).into())
    }

    fn confirm(&mut self, key: &str, _question: &str, default: bool) -> Result<bool> {
        self.prompts_shown.push(key.to_string());
        Ok(self.confirm_responses.get(key).copied().unwrap_or(default))
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_all_message_kinds() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");

        assert_eq!(ui.messages(), ["m"]);
        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert_eq!(ui.errors(), ["e"]);
    }

    #[test]
    fn scripted_input_is_returned() {
        let mut ui = MockUI::new();
        ui.set_input_response("date-path", "2025/Oct/28");
        assert_eq!(ui.input("date-path", "?").unwrap(), "2025/Oct/28");
        assert_eq!(ui.prompts_shown(), ["date-path"]);
    }

    #[test]
    fn unscripted_input_errors() {
        let mut ui = MockUI::new();
        assert!(ui.input("missing", "?").is_err());
    }

    #[test]
    fn confirm_falls_back_to_default() {
        let mut ui = MockUI::new();
        assert!(ui.confirm("go", "?", true).unwrap());
        ui.set_confirm_response("go", false);
        assert!(!ui.confirm("go", "?", true).unwrap());
    }
}
