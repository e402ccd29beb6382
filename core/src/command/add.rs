use tracing::info;

use crate::command::{Command, CommandResult};
use crate::error::CommandError;
use crate::model::task::Task;
use crate::service::model::Model;

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add: Adds a task to the task tracker.\n\
    Parameters: n/NAME mc/MODULE_CODE d/DEADLINE_DATE t/DEADLINE_TIME w/WEIGHTAGE \
    [ptag/PRIORITY_TAG] [pt/TAG]...\n\
    Example: add n/Week 10 Quiz mc/CS2103 d/01-04-2021 t/10:10 w/5 ptag/HIGH pt/core";

#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    to_add: Task,
}

impl AddCommand {
    pub fn new(to_add: Task) -> Self {
        Self { to_add }
    }
}

impl Command for AddCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_task(&self.to_add) {
            return Err(CommandError::DuplicateTask);
        }
        model.add_task(self.to_add.clone())?;
        info!(task = %self.to_add.name(), module = %self.to_add.module_code(), "Task added");
        Ok(CommandResult::new(format!("New task added: {}", self.to_add)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::test_support::{assert_command_failure, assert_command_success};
    use crate::model::tracker::TaskTracker;
    use crate::service::model::ModelManager;
    use crate::testutil::{today, typical_model, TaskBuilder, CS2100, CS2103};

    #[test]
    fn test_add_new_task() {
        let mut model = typical_model();
        let mut expected = typical_model();
        let task = CS2100.build();
        expected.add_task(task.clone()).unwrap();

        assert_command_success(
            &AddCommand::new(task.clone()),
            &mut model,
            &format!("New task added: {}", task),
            &expected,
        );
    }

    #[test]
    fn test_add_duplicate_identity_fails() {
        let mut model = typical_model();
        let same_identity = TaskBuilder::from(&CS2103.build()).weightage(90).build();
        assert_command_failure(
            &AddCommand::new(same_identity),
            &mut model,
            CommandError::DuplicateTask,
        );
    }

    #[test]
    fn test_adding_same_task_twice() {
        let mut model = ModelManager::with_clock(TaskTracker::new(), today);
        let task = CS2103.build();
        AddCommand::new(task.clone()).execute(&mut model).unwrap();
        let err = AddCommand::new(task).execute(&mut model).unwrap_err();
        assert_eq!(err.to_string(), "This task already exists in the task tracker.");
        assert_eq!(model.tracker().tasks().len(), 1);
    }

    #[test]
    fn test_equality() {
        assert_eq!(AddCommand::new(CS2103.build()), AddCommand::new(CS2103.build()));
        assert_ne!(AddCommand::new(CS2103.build()), AddCommand::new(CS2100.build()));
    }
}
