use chrono::NaiveDate;

use crate::command::{Command, CommandResult};
use crate::error::CommandError;
use crate::model::predicate::TaskPredicate;
use crate::service::model::Model;

pub const DUE_IN_COMMAND_WORD: &str = "dueIn";
pub const DUE_IN_USAGE: &str = "dueIn: Lists the tasks whose deadline falls between today \
    and the given number of days or weeks from today, inclusive. Without parameters, \
    the configured default number of days is used.\n\
    Parameters: [day/NUMBER_OF_DAYS] | [week/NUMBER_OF_WEEKS]\n\
    Example: dueIn day/9";

pub const DUE_BETWEEN_COMMAND_WORD: &str = "dueBetween";
pub const DUE_BETWEEN_USAGE: &str = "dueBetween: Lists the tasks whose deadline falls \
    between the two dates, inclusive.\n\
    Parameters: start/START_DATE end/END_DATE (dd-mm-yyyy)\n\
    Example: dueBetween start/01-04-2021 end/14-04-2021";

pub const FIND_COMMAND_WORD: &str = "find";
pub const FIND_USAGE: &str = "find: Lists the tasks whose names contain any of \
    the given keywords (case-insensitive).\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find quiz tutorial";

pub const LIST_COMMAND_WORD: &str = "list";
pub const LIST_USAGE: &str = "list: Lists all tasks.";

pub fn tasks_listed(count: usize) -> String {
    format!("{} tasks listed!", count)
}

fn apply_filter(model: &mut dyn Model, predicate: TaskPredicate) -> CommandResult {
    model.update_filtered_task_list(predicate);
    CommandResult::new(tasks_listed(model.filtered_task_list().len()))
}

/// Shows tasks due from today up to `days` days ahead.
#[derive(Debug, Clone, PartialEq)]
pub struct DueInCommand {
    predicate: TaskPredicate,
}

impl DueInCommand {
    pub fn new(days: u32) -> Self {
        Self {
            predicate: TaskPredicate::DueWithin { days },
        }
    }

    pub fn weeks(weeks: u32) -> Self {
        Self::new(weeks.saturating_mul(7))
    }
}

impl Command for DueInCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(apply_filter(model, self.predicate.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DueBetweenCommand {
    predicate: TaskPredicate,
}

impl DueBetweenCommand {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            predicate: TaskPredicate::DueBetween { start, end },
        }
    }
}

impl Command for DueBetweenCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(apply_filter(model, self.predicate.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FindCommand {
    predicate: TaskPredicate,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            predicate: TaskPredicate::NameContains(keywords),
        }
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(apply_filter(model, self.predicate.clone()))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCommand;

impl Command for ListCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_task_list(TaskPredicate::All);
        Ok(CommandResult::new("Listed all tasks"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::test_support::assert_command_success;
    use crate::model::task::Task;
    use crate::model::tracker::TaskTracker;
    use crate::service::model::ModelManager;
    use crate::testutil::{today, typical_model, CS1010E, CS2030, CS2040, CS2103, CS3244};

    fn visible(model: &ModelManager) -> Vec<Task> {
        model.filtered_task_list().into_iter().cloned().collect()
    }

    #[test]
    fn test_equality() {
        let first = DueInCommand::new(9);
        let second = DueInCommand::weeks(1);

        assert_eq!(first, first.clone());
        assert_eq!(first, DueInCommand::new(9));
        assert_eq!(second, DueInCommand::new(7));
        assert_ne!(first, second);
    }

    #[test]
    fn test_due_in_scenario() {
        let mut tracker = TaskTracker::new();
        tracker.add_task(CS2103.build()).unwrap();
        tracker.add_task(CS3244.build()).unwrap();
        let mut model = ModelManager::with_clock(tracker, today);

        let result = DueInCommand::new(9).execute(&mut model).unwrap();
        assert_eq!(result.feedback, "1 tasks listed!");
        assert_eq!(visible(&model), vec![CS2103.build()]);
    }

    #[test]
    fn test_due_in_days() {
        let mut model = typical_model();
        let mut expected = typical_model();
        expected.update_filtered_task_list(TaskPredicate::DueWithin { days: 9 });

        assert_command_success(&DueInCommand::new(9), &mut model, "2 tasks listed!", &expected);
        assert_eq!(visible(&model), vec![CS2103.build(), CS2040.build()]);
    }

    #[test]
    fn test_due_in_weeks() {
        let mut model = typical_model();
        DueInCommand::weeks(6).execute(&mut model).unwrap();
        // overdue CS1010E is excluded
        assert_eq!(
            visible(&model),
            vec![CS2103.build(), CS2040.build(), CS2030.build(), CS3244.build()]
        );
    }

    #[test]
    fn test_due_in_zero_matches() {
        let mut model = typical_model();
        let result = DueInCommand::new(0).execute(&mut model).unwrap();
        assert_eq!(result.feedback, "0 tasks listed!");
        assert!(visible(&model).is_empty());
    }

    #[test]
    fn test_due_between() {
        let mut model = typical_model();
        let command = DueBetweenCommand::new(
            NaiveDate::from_ymd_opt(2021, 3, 31).unwrap(),
            NaiveDate::from_ymd_opt(2021, 4, 3).unwrap(),
        );
        let result = command.execute(&mut model).unwrap();
        assert_eq!(result.feedback, "2 tasks listed!");
        assert_eq!(visible(&model), vec![CS2103.build(), CS1010E.build()]);
    }

    #[test]
    fn test_find_then_list() {
        let mut model = typical_model();
        FindCommand::new(vec!["tutorial".into()]).execute(&mut model).unwrap();
        assert_eq!(visible(&model), vec![CS1010E.build(), CS2030.build()]);

        let result = ListCommand.execute(&mut model).unwrap();
        assert_eq!(result.feedback, "Listed all tasks");
        assert_eq!(visible(&model).len(), 5);
    }
}
