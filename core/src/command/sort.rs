use tracing::info;

use crate::command::{Command, CommandResult};
use crate::error::{CommandError, ParseError};
use crate::model::sort::SortStrategy;
use crate::service::model::Model;

pub const COMMAND_WORD: &str = "sort";

pub const MESSAGE_USAGE: &str = "sort: Sorts the task list.\n\
    Parameters: -dl (deadline) | -w (weightage) | -mc (module code) | -n (name) \
    | -pt (priority) | -u (urgency)\n\
    Example: sort -dl";

pub const MESSAGE_INVALID_FLAG: &str = "Sort flag should be one of -dl, -w, -mc, -n, -pt or -u";

pub fn parse_sort_flag(input: &str) -> Result<SortStrategy, ParseError> {
    match input.trim() {
        "-dl" => Ok(SortStrategy::Deadline),
        "-w" => Ok(SortStrategy::Weightage),
        "-mc" => Ok(SortStrategy::ModuleCode),
        "-n" => Ok(SortStrategy::Name),
        "-pt" => Ok(SortStrategy::Priority),
        "-u" => Ok(SortStrategy::Urgency),
        _ => Err(ParseError::InvalidValue(MESSAGE_INVALID_FLAG.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortCommand {
    strategy: SortStrategy,
}

impl SortCommand {
    pub fn new(strategy: SortStrategy) -> Self {
        Self { strategy }
    }
}

impl Command for SortCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.sort_tasks(self.strategy);
        info!(strategy = ?self.strategy, "Tasks sorted");
        Ok(CommandResult::new(format!(
            "Sorted tasks by {}",
            self.strategy.description()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{typical_model, CS1010E, CS2103};

    #[test]
    fn test_parse_sort_flag() {
        assert_eq!(parse_sort_flag("-dl").unwrap(), SortStrategy::Deadline);
        assert_eq!(parse_sort_flag(" -pt ").unwrap(), SortStrategy::Priority);
        assert!(parse_sort_flag("-x").is_err());
        assert!(parse_sort_flag("").is_err());
    }

    #[test]
    fn test_sort_reorders_main_list_only() {
        let mut model = typical_model();
        model.add_daily_task(CS2103.build()).unwrap();

        let result = SortCommand::new(SortStrategy::Weightage).execute(&mut model).unwrap();
        assert_eq!(result.feedback, "Sorted tasks by weightage");
        assert_eq!(model.tracker().tasks()[0], CS1010E.build());
        assert_eq!(model.daily_task_list(), &[CS2103.build()]);
    }
}
