use tracing::info;

use crate::command::{task_at, Command, CommandResult};
use crate::error::CommandError;
use crate::index::Index;
use crate::model::fields::Notes;
use crate::service::model::Model;

pub const COMMAND_WORD: &str = "notes";

pub const MESSAGE_USAGE: &str = "notes: Replaces the notes of the task identified by the \
    index number used in the displayed task list. An empty r/ removes the notes.\n\
    Parameters: INDEX (must be a positive integer) r/[NOTES]\n\
    Example: notes 1 r/Read chapter 3 first";

#[derive(Debug, Clone, PartialEq)]
pub struct NotesCommand {
    index: Index,
    notes: Notes,
}

impl NotesCommand {
    pub fn new(index: Index, notes: Notes) -> Self {
        Self { index, notes }
    }
}

impl Command for NotesCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let task = task_at(model, self.index)?;
        let edited = task.clone().with_notes(self.notes.clone());

        model.set_task(&task, edited.clone())?;
        model.refresh_daily_tasks(&task, edited.clone())?;

        info!(index = %self.index, task = %task.name(), "Notes updated");
        let feedback = if self.notes.is_empty() {
            format!("Removed notes from Task: {}", edited.name())
        } else {
            format!("Added notes to Task: {}", edited.name())
        };
        Ok(CommandResult::new(feedback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{typical_model, CS2103};

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn test_add_and_remove_notes() {
        let mut model = typical_model();
        model.add_daily_task(CS2103.build()).unwrap();

        let result = NotesCommand::new(first(), Notes::new("bring calculator"))
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.feedback, "Added notes to Task: Week 10 Quiz");
        assert_eq!(model.tracker().tasks()[0].notes().as_str(), "bring calculator");
        assert_eq!(model.daily_task_list()[0].notes().as_str(), "bring calculator");

        let result = NotesCommand::new(first(), Notes::default())
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.feedback, "Removed notes from Task: Week 10 Quiz");
        assert!(model.tracker().tasks()[0].notes().is_empty());
    }

    #[test]
    fn test_invalid_index() {
        let mut model = typical_model();
        let err = NotesCommand::new(Index::from_one_based(9).unwrap(), Notes::default())
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err, CommandError::InvalidTaskIndex);
    }
}
