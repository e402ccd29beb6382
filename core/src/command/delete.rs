use tracing::info;

use crate::command::{daily_copy_of, task_at, Command, CommandResult};
use crate::error::CommandError;
use crate::index::Index;
use crate::service::model::Model;

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete: Deletes the task identified by the index number \
    used in the displayed task list. The task is also removed from the daily task list.\n\
    Parameters: INDEX (must be a positive integer)\n\
    Example: delete 1";

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let task = task_at(model, self.index)?;

        model.delete_task(&task)?;
        if let Some(daily) = daily_copy_of(model, &task) {
            model.delete_daily_task(&daily)?;
        }

        info!(index = %self.index, task = %task.name(), "Task deleted");
        Ok(CommandResult::new(format!("Deleted Task: {}", task)))
    }
}
