//! The `write` command: run one log session end to end.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::cli::args::WriteArgs;
use crate::error::Result;
use crate::session::{ArchiveOutcome, LogSession};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The write command implementation.
pub struct WriteCommand {
    base: PathBuf,
    args: WriteArgs,
}

impl WriteCommand {
    /// Create a new write command.
    pub fn new(base: &Path, args: WriteArgs) -> Self {
        Self {
            base: base.to_path_buf(),
            args,
        }
    }
}

impl Command for WriteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut session = LogSession::new(&self.base.to_string_lossy());

        let path = session.initialize()?;
        ui.message(&format!("Log file created: {}", path.display()));

        for message in &self.args.messages {
            session.append(message)?;
            if ui.output_mode().shows_detail() {
                ui.message(&format!("  {}", message));
            }
        }

        if self.args.stdin {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                session.append(&line?)?;
            }
        }

        session.close()?;
        ui.success(&format!("Log written to {}", path.display()));

        if self.args.archive {
            match session.archive()? {
                ArchiveOutcome::Archived { to, .. } => {
                    ui.success(&format!("Archived to {}", to.display()));
                }
                ArchiveOutcome::NothingToArchive => {
                    ui.warning("No log file to archive.");
                }
            }
        }

        Ok(CommandResult::success())
    }
}
