//! The `move` command: relocate one log file to another folder.

use std::path::{Path, PathBuf};

use crate::cli::args::MoveArgs;
use crate::error::Result;
use crate::ops::{self, MoveOutcome};
use crate::ui::UserInterface;

use super::component_or_prompt;
use super::dispatcher::{Command, CommandResult};

/// The move command implementation.
pub struct MoveCommand {
    base: PathBuf,
    args: MoveArgs,
}

impl MoveCommand {
    /// Create a new move command.
    pub fn new(base: &Path, args: MoveArgs) -> Self {
        Self {
            base: base.to_path_buf(),
            args,
        }
    }
}

impl Command for MoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let date_path = component_or_prompt(
            ui,
            self.args.date_path.as_deref(),
            "date-path",
            "Log date path (e.g. 2025/Oct/28)",
        )?;
        let file_name = component_or_prompt(
            ui,
            self.args.file_name.as_deref(),
            "file-name",
            "Log file name (e.g. log_12-34-56.txt)",
        )?;
        let destination = component_or_prompt(
            ui,
            self.args.destination.as_deref(),
            "destination",
            "Destination folder (e.g. Logs/Archive/2025/Oct/28)",
        )?;

        let outcome = ops::move_log(
            &self.base,
            &date_path,
            &file_name,
            Path::new(&destination),
        )?;

        match outcome {
            MoveOutcome::Moved { to, .. } => {
                ui.success(&format!("Moved to {}", to.display()));
                Ok(CommandResult::success())
            }
            MoveOutcome::CopiedNotRemoved { from, to } => {
                ui.warning(&format!(
                    "Copied to {} but could not remove {}; both files exist",
                    to.display(),
                    from.display()
                ));
                Ok(CommandResult::success())
            }
            MoveOutcome::NotFound { path } => {
                ui.error(&format!("Source file not found: {}", path.display()));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
