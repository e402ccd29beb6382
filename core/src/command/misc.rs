use tracing::info;

use crate::command::{add, daily, delete, edit, filter, finish, notes, sort, Command, CommandResult};
use crate::error::CommandError;
use crate::model::tracker::TaskTracker;
use crate::service::model::Model;

pub const CLEAR_COMMAND_WORD: &str = "clear";
pub const CLEAR_USAGE: &str = "clear: Deletes every task, including the daily task list.";

pub const HELP_COMMAND_WORD: &str = "help";
pub const HELP_USAGE: &str = "help: Shows the usage of every command.";

pub const EXIT_COMMAND_WORD: &str = "exit";
pub const EXIT_USAGE: &str = "exit: Saves and quits.";

/// Usage of every command, in the order `help` prints them.
pub fn help_text() -> String {
    [
        add::MESSAGE_USAGE,
        edit::MESSAGE_USAGE,
        notes::MESSAGE_USAGE,
        delete::MESSAGE_USAGE,
        finish::MESSAGE_USAGE,
        daily::MESSAGE_USAGE,
        filter::LIST_USAGE,
        filter::FIND_USAGE,
        filter::DUE_IN_USAGE,
        filter::DUE_BETWEEN_USAGE,
        sort::MESSAGE_USAGE,
        CLEAR_USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ]
    .join("\n\n")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.reset_tracker(TaskTracker::new());
        info!("Task tracker cleared");
        Ok(CommandResult::new("Task tracker has been cleared!"))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            show_help: true,
            ..CommandResult::new("Showing help.")
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            exit: true,
            ..CommandResult::new("Exiting task tracker as requested ...")
        })
    }
}
