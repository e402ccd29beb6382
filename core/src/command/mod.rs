//! Executable commands.
//!
//! Each command is a plain value built by the parser. Commands compare
//! structurally, so a parsed command can be checked against an expected one
//! with `==`.

pub mod add;
pub mod daily;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod finish;
pub mod misc;
pub mod notes;
pub mod sort;

use crate::error::CommandError;
use crate::index::Index;
use crate::model::task::Task;
use crate::service::model::Model;

pub use add::AddCommand;
pub use daily::{DailyTodoCommand, OperationFlag};
pub use delete::DeleteCommand;
pub use edit::{create_edited_task, EditCommand, EditTaskDescriptor};
pub use filter::{DueBetweenCommand, DueInCommand, FindCommand, ListCommand};
pub use finish::FinishCommand;
pub use misc::{ClearCommand, ExitCommand, HelpCommand};
pub use notes::NotesCommand;
pub use sort::SortCommand;

/// What the caller shows after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

pub trait Command {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerCommand {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Finish(FinishCommand),
    Notes(NotesCommand),
    DailyTodo(DailyTodoCommand),
    DueIn(DueInCommand),
    DueBetween(DueBetweenCommand),
    Find(FindCommand),
    List(ListCommand),
    Sort(SortCommand),
    Clear(ClearCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl TrackerCommand {
    /// True for commands that can change stored data. Filtering only
    /// changes the view and is not persisted.
    pub fn mutates_data(&self) -> bool {
        matches!(
            self,
            TrackerCommand::Add(_)
                | TrackerCommand::Edit(_)
                | TrackerCommand::Delete(_)
                | TrackerCommand::Finish(_)
                | TrackerCommand::Notes(_)
                | TrackerCommand::DailyTodo(_)
                | TrackerCommand::Sort(_)
                | TrackerCommand::Clear(_)
        )
    }
}

impl Command for TrackerCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        match self {
            TrackerCommand::Add(c) => c.execute(model),
            TrackerCommand::Edit(c) => c.execute(model),
            TrackerCommand::Delete(c) => c.execute(model),
            TrackerCommand::Finish(c) => c.execute(model),
            TrackerCommand::Notes(c) => c.execute(model),
            TrackerCommand::DailyTodo(c) => c.execute(model),
            TrackerCommand::DueIn(c) => c.execute(model),
            TrackerCommand::DueBetween(c) => c.execute(model),
            TrackerCommand::Find(c) => c.execute(model),
            TrackerCommand::List(c) => c.execute(model),
            TrackerCommand::Sort(c) => c.execute(model),
            TrackerCommand::Clear(c) => c.execute(model),
            TrackerCommand::Help(c) => c.execute(model),
            TrackerCommand::Exit(c) => c.execute(model),
        }
    }
}

/// Looks up `index` in the filtered task list.
pub(crate) fn task_at(model: &dyn Model, index: Index) -> Result<Task, CommandError> {
    model
        .filtered_task_list()
        .get(index.zero_based())
        .map(|t| (*t).clone())
        .ok_or(CommandError::InvalidTaskIndex)
}

/// The daily-list copy of `task`, matched by identity.
pub(crate) fn daily_copy_of(model: &dyn Model, task: &Task) -> Option<Task> {
    model
        .daily_task_list()
        .iter()
        .find(|t| t.is_same_task(task))
        .cloned()
}
