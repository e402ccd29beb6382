use tracing::{info, warn};

use crate::command::{Command, CommandResult};
use crate::error::LogicError;
use crate::parser::TrackerParser;
use crate::repository::TrackerRepository;
use crate::service::model::{Model, ModelManager};

/// Parses a line of input, runs it against the model and persists the
/// tracker after every command that can change it.
pub struct LogicManager<R: TrackerRepository> {
    model: ModelManager,
    repo: R,
    parser: TrackerParser,
}

impl<R: TrackerRepository> LogicManager<R> {
    pub fn new(model: ModelManager, repo: R, parser: TrackerParser) -> Self {
        Self { model, repo, parser }
    }

    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        info!(input = command_text, "Executing command");
        let command = self.parser.parse_command(command_text)?;
        let result = command.execute(&mut self.model)?;

        if command.mutates_data() {
            if let Err(e) = self.repo.save(self.model.tracker()) {
                warn!(error = %e, "Could not persist task tracker");
                return Err(LogicError::Storage(e));
            }
        }
        Ok(result)
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use anyhow::{anyhow, Result};

    use super::*;
    use crate::error::{CommandError, ParseError, MESSAGE_DUPLICATE_TASK};
    use crate::model::tracker::TaskTracker;
    use crate::testutil::{typical_model, CS2103, CS3244};

    #[derive(Default)]
    struct MockTrackerRepo {
        saved: RefCell<Vec<TaskTracker>>,
        fail: Cell<bool>,
    }

    impl TrackerRepository for &MockTrackerRepo {
        fn load(&self) -> Result<Option<TaskTracker>> {
            Ok(self.saved.borrow().last().cloned())
        }

        fn save(&self, tracker: &TaskTracker) -> Result<()> {
            if self.fail.get() {
                return Err(anyhow!("disk full"));
            }
            self.saved.borrow_mut().push(tracker.clone());
            Ok(())
        }
    }

    fn logic(repo: &MockTrackerRepo) -> LogicManager<&MockTrackerRepo> {
        LogicManager::new(typical_model(), repo, TrackerParser::default())
    }

    #[test]
    fn test_list_does_not_save() {
        let repo = MockTrackerRepo::default();
        let mut logic = logic(&repo);
        let result = logic.execute("list").unwrap();
        assert_eq!(result.feedback, "Listed all tasks");
        assert!(repo.saved.borrow().is_empty());
    }

    #[test]
    fn test_mutating_command_saves_tracker() {
        let repo = MockTrackerRepo::default();
        let mut logic = logic(&repo);
        logic.execute("delete 1").unwrap();

        let saved = repo.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(&saved[0], logic.model().tracker());
        assert!(!saved[0].has_task(&CS2103.build()));
    }

    #[test]
    fn test_duplicate_add_is_a_command_error() {
        let repo = MockTrackerRepo::default();
        let mut logic = logic(&repo);
        let err = logic
            .execute("add n/Week 10 Quiz mc/CS2103 d/03-04-2021 t/10:10 w/5")
            .unwrap_err();
        assert!(matches!(err, LogicError::Command(CommandError::DuplicateTask)));
        assert_eq!(err.to_string(), MESSAGE_DUPLICATE_TASK);
        assert!(repo.saved.borrow().is_empty());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let repo = MockTrackerRepo::default();
        let mut logic = logic(&repo);
        let err = logic.execute("frobnicate").unwrap_err();
        assert!(matches!(err, LogicError::Parse(ParseError::UnknownCommand(_))));
    }

    #[test]
    fn test_save_failure_keeps_change_in_memory() {
        let repo = MockTrackerRepo::default();
        repo.fail.set(true);
        let mut logic = logic(&repo);
        let err = logic.execute("delete 1").unwrap_err();
        assert!(matches!(err, LogicError::Storage(_)));
        assert_eq!(err.to_string(), "Could not save data to file: disk full");
        assert!(!logic.model().tracker().has_task(&CS2103.build()));
    }

    #[test]
    fn test_due_in_lists_tasks_in_window() {
        let repo = MockTrackerRepo::default();
        let mut logic = LogicManager::new(
            ModelManager::with_clock(TaskTracker::new(), crate::testutil::today),
            &repo,
            TrackerParser::default(),
        );
        logic.execute("add n/Week 10 Quiz mc/CS2103 d/03-04-2021 t/10:10 w/5").unwrap();
        logic.execute("add n/Write Tests mc/CS3244 d/11-05-2021 t/10:10 w/15").unwrap();

        let result = logic.execute("dueIn day/9").unwrap();
        assert_eq!(result.feedback, "1 tasks listed!");
        let visible: Vec<_> = logic.model().filtered_task_list().into_iter().cloned().collect();
        assert_eq!(visible, vec![CS2103.builder().priority("LOW").tags(&[]).build()]);
        assert!(!visible.contains(&CS3244.build()));
    }
}
