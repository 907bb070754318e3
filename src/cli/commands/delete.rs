//! The `delete` command: remove one log file.

use std::path::{Path, PathBuf};

use crate::cli::args::DeleteArgs;
use crate::error::Result;
use crate::ops::{self, DeleteOutcome};
use crate::ui::UserInterface;

use super::component_or_prompt;
use super::dispatcher::{Command, CommandResult};

/// The delete command implementation.
pub struct DeleteCommand {
    base: PathBuf,
    args: DeleteArgs,
}

impl DeleteCommand {
    /// Create a new delete command.
    pub fn new(base: &Path, args: DeleteArgs) -> Self {
        Self {
            base: base.to_path_buf(),
            args,
        }
    }
}

impl Command for DeleteCommand {
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

        let target = ops::resolve(&self.base, &date_path, &file_name);
        if !self.args.yes && ui.is_interactive() {
            let proceed = ui.confirm(
                "delete",
                &format!("Delete {}?", target.display()),
                false,
            )?;
            if !proceed {
                ui.message("Nothing deleted.");
                return Ok(CommandResult::success());
            }
        }

        match ops::delete_log(&self.base, &date_path, &file_name)? {
            DeleteOutcome::Deleted { path } => {
                ui.success(&format!("Deleted {}", path.display()));
                Ok(CommandResult::success())
            }
            DeleteOutcome::NotFound { path } => {
                ui.error(&format!("File not found: {}", path.display()));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
