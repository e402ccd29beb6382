use chrono::NaiveDate;

use crate::model::task::Task;
use crate::time;

/// Selects which tasks the filtered view shows.
///
/// Predicates compare structurally, so two commands carrying the same
/// parameters are equal. Date-relative predicates are evaluated against the
/// `today` passed to [`TaskPredicate::test`] rather than capturing a date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskPredicate {
    #[default]
    All,
    /// Deadline date in `[today, today + days]`, both ends inclusive.
    DueWithin { days: u32 },
    /// Deadline date in `[start, end]`, both ends inclusive.
    DueBetween { start: NaiveDate, end: NaiveDate },
    /// Task name contains any of the keywords as a whole word, ignoring case.
    NameContains(Vec<String>),
}

impl TaskPredicate {
    pub fn test(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            TaskPredicate::All => true,
            TaskPredicate::DueWithin { days } => {
                let date = task.deadline_date().date();
                date >= today && date <= time::window_end(today, *days)
            }
            TaskPredicate::DueBetween { start, end } => {
                let date = task.deadline_date().date();
                date >= *start && date <= *end
            }
            TaskPredicate::NameContains(keywords) => {
                let name = task.name().as_str().to_lowercase();
                keywords.iter().any(|keyword| {
                    let keyword = keyword.to_lowercase();
                    name.split_whitespace().any(|word| word == keyword)
                })
            }
        }
    }
}
