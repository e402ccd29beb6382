use tracing::info;

use crate::command::{daily_copy_of, task_at, Command, CommandResult};
use crate::error::CommandError;
use crate::index::Index;
use crate::service::model::Model;

pub const COMMAND_WORD: &str = "finish";

pub const MESSAGE_USAGE: &str = "finish: Marks the task identified by the index number \
    used in the displayed task list as finished.\n\
    Parameters: INDEX (must be a positive integer)\n\
    Example: finish 1";

#[derive(Debug, Clone, PartialEq)]
pub struct FinishCommand {
    index: Index,
}

impl FinishCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for FinishCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let task = task_at(model, self.index)?;
        if task.status().is_finished() {
            return Err(CommandError::AlreadyFinished);
        }

        model.finish_task(&task)?;
        if let Some(daily) = daily_copy_of(model, &task) {
            model.finish_daily_task(&daily)?;
        }

        info!(index = %self.index, task = %task.name(), "Task finished");
        Ok(CommandResult::new(format!("Finished Task: {}", task.name())))
    }
}
