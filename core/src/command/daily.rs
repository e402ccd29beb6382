use tracing::info;

use crate::command::{task_at, Command, CommandResult};
use crate::error::{CommandError, ParseError};
use crate::index::Index;
use crate::service::model::Model;

pub const COMMAND_WORD: &str = "doToday";

pub const MESSAGE_USAGE: &str = "doToday: Adds a task from the displayed task list to the \
    daily task list, or removes a task from the daily task list.\n\
    Parameters: -a INDEX (index in the displayed task list) | -r INDEX (index in the daily task list)\n\
    Example: doToday -a 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationFlag {
    Add,
    Remove,
}

impl OperationFlag {
    pub const CONSTRAINTS: &'static str = "Operation flag should be -a (add) or -r (remove)";

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match input.trim() {
            "-a" => Ok(OperationFlag::Add),
            "-r" => Ok(OperationFlag::Remove),
            _ => Err(ParseError::InvalidValue(Self::CONSTRAINTS.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyTodoCommand {
    index: Index,
    flag: OperationFlag,
}

impl DailyTodoCommand {
    pub fn new(index: Index, flag: OperationFlag) -> Self {
        Self { index, flag }
    }
}

impl Command for DailyTodoCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        match self.flag {
            OperationFlag::Add => {
                let task = task_at(model, self.index)?;
                if model.has_daily_task(&task) {
                    return Err(CommandError::DuplicateDailyTask);
                }
                model.add_daily_task(task.clone())?;
                info!(task = %task.name(), "Task added to daily list");
                Ok(CommandResult::new(format!(
                    "Added Task to daily task list: {}",
                    task.name()
                )))
            }
            OperationFlag::Remove => {
                let task = model
                    .daily_task_list()
                    .get(self.index.zero_based())
                    .cloned()
                    .ok_or(CommandError::InvalidTaskIndex)?;
                model.delete_daily_task(&task)?;
                info!(task = %task.name(), "Task removed from daily list");
                Ok(CommandResult::new(format!(
                    "Removed Task from daily task list: {}",
                    task.name()
                )))
            }
        }
    }
}
