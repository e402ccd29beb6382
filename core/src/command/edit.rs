use std::collections::BTreeSet;

use tracing::info;

use crate::command::{task_at, Command, CommandResult};
use crate::error::CommandError;
use crate::index::Index;
use crate::model::fields::{DeadlineDate, DeadlineTime, ModuleCode, Notes, TaskName, Weightage};
use crate::model::tag::{PriorityTag, Tag};
use crate::model::task::Task;
use crate::service::model::Model;

pub const COMMAND_WORD: &str = "edit";

pub const MESSAGE_USAGE: &str = "edit: Edits the details of the task identified \
    by the index number used in the displayed task list. \
    Existing values will be overwritten by the input values.\n\
    Parameters: INDEX (must be a positive integer) [n/NAME] [mc/MODULE_CODE] \
    [d/DEADLINE_DATE] [t/DEADLINE_TIME] [w/WEIGHTAGE] [r/NOTES] [ptag/PRIORITY_TAG] [pt/TAG]...\n\
    Example: edit 1 n/CS2103 Assignment w/10";

/// The fields an edit replaces. `None` keeps the task's current value.
///
/// Status is deliberately absent: it only changes through `finish`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskDescriptor {
    pub name: Option<TaskName>,
    pub module_code: Option<ModuleCode>,
    pub deadline_date: Option<DeadlineDate>,
    pub deadline_time: Option<DeadlineTime>,
    pub weightage: Option<Weightage>,
    pub notes: Option<Notes>,
    pub tags: Option<BTreeSet<Tag>>,
    pub priority_tag: Option<PriorityTag>,
}

impl EditTaskDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.module_code.is_some()
            || self.deadline_date.is_some()
            || self.deadline_time.is_some()
            || self.weightage.is_some()
            || self.notes.is_some()
            || self.tags.is_some()
            || self.priority_tag.is_some()
    }
}

/// Overlays `descriptor` on `task`, keeping every field the descriptor
/// leaves unset, and the status unconditionally.
pub fn create_edited_task(task: &Task, descriptor: &EditTaskDescriptor) -> Task {
    let d = descriptor;
    Task::new(
        d.name.clone().unwrap_or_else(|| task.name().clone()),
        d.module_code.clone().unwrap_or_else(|| task.module_code().clone()),
        d.deadline_date.unwrap_or(task.deadline_date()),
        d.deadline_time.unwrap_or(task.deadline_time()),
        d.weightage.unwrap_or(task.weightage()),
    )
    .with_status(task.status())
    .with_notes(d.notes.clone().unwrap_or_else(|| task.notes().clone()))
    .with_tags(d.tags.clone().unwrap_or_else(|| task.tags().clone()))
    .with_priority_tag(d.priority_tag.unwrap_or(task.priority_tag()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditTaskDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditTaskDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl Command for EditCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::NotEdited);
        }

        let task_to_edit = task_at(model, self.index)?;
        let edited = create_edited_task(&task_to_edit, &self.descriptor);

        if !task_to_edit.is_same_task(&edited) && model.has_task(&edited) {
            return Err(CommandError::DuplicateTask);
        }

        model.set_task(&task_to_edit, edited.clone())?;
        model.refresh_daily_tasks(&task_to_edit, edited.clone())?;

        info!(index = %self.index, task = %edited.name(), "Task edited");
        Ok(CommandResult::new(format!("Edited Task: {}", edited)))
    }
}
