//! The `view` command: list a date partition, open the latest log.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::ViewArgs;
use crate::error::Result;
use crate::ops::browse;
use crate::ui::UserInterface;

use super::component_or_prompt;
use super::dispatcher::{Command, CommandResult};

/// The view command implementation.
pub struct ViewCommand {
    base: PathBuf,
    args: ViewArgs,
}

/// JSON shape for `view --json`.
#[derive(Debug, Serialize)]
struct PartitionListing {
    date_path: String,
    folder: String,
    logs: Vec<String>,
}

impl ViewCommand {
    /// Create a new view command.
    pub fn new(base: &Path, args: ViewArgs) -> Self {
        Self {
            base: base.to_path_buf(),
            args,
        }
    }
}

impl Command for ViewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let date_path = component_or_prompt(
            ui,
            self.args.date_path.as_deref(),
            "date-path",
            "Log date path (e.g. 2025/Oct/28)",
        )?;

        let logs = browse::list_partition(&self.base, &date_path)?;
        let names: Vec<String> = logs
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();

        if self.args.json {
            let listing = PartitionListing {
                folder: self.base.join(&date_path).display().to_string(),
                date_path,
                logs: names,
            };
            let json = serde_json::to_string_pretty(&listing).map_err(anyhow::Error::new)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        if logs.is_empty() {
            ui.warning(&format!(
                "No log files found under {}",
                self.base.join(&date_path).display()
            ));
            return Ok(CommandResult::success());
        }

        ui.message(&format!("Logs for {}:", date_path));
        for name in &names {
            ui.message(&format!("  {}", name));
        }

        if !self.args.no_open {
            // The listing is sorted, so the last entry is the latest log.
            if let Some(latest) = logs.last() {
                ui.message(&format!("Opening {}", latest.display()));
                browse::open_in_viewer(latest)?;
            }
        }

        Ok(CommandResult::success())
    }
}
