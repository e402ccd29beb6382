use chrono::NaiveDate;
use tracing::debug;

use crate::error::TrackerError;
use crate::model::predicate::TaskPredicate;
use crate::model::sort::SortStrategy;
use crate::model::task::Task;
use crate::model::tracker::TaskTracker;
use crate::time;

/// What commands are allowed to see and change.
///
/// Indices given by the user always refer to [`Model::filtered_task_list`]
/// or [`Model::daily_task_list`] as currently displayed.
pub trait Model {
    fn tracker(&self) -> &TaskTracker;
    fn reset_tracker(&mut self, tracker: TaskTracker);

    fn has_task(&self, task: &Task) -> bool;
    fn has_daily_task(&self, task: &Task) -> bool;

    /// Adds a task and resets the filter so the new task is visible.
    fn add_task(&mut self, task: Task) -> Result<(), TrackerError>;
    fn delete_task(&mut self, target: &Task) -> Result<(), TrackerError>;
    fn set_task(&mut self, target: &Task, edited: Task) -> Result<(), TrackerError>;
    fn finish_task(&mut self, target: &Task) -> Result<(), TrackerError>;

    fn add_daily_task(&mut self, task: Task) -> Result<(), TrackerError>;
    fn delete_daily_task(&mut self, target: &Task) -> Result<(), TrackerError>;
    fn finish_daily_task(&mut self, target: &Task) -> Result<(), TrackerError>;
    fn refresh_daily_tasks(&mut self, target: &Task, edited: Task) -> Result<(), TrackerError>;

    fn sort_tasks(&mut self, strategy: SortStrategy);

    fn filtered_task_list(&self) -> Vec<&Task>;
    fn daily_task_list(&self) -> &[Task];
    fn update_filtered_task_list(&mut self, predicate: TaskPredicate);
    fn filter(&self) -> &TaskPredicate;

    fn today(&self) -> NaiveDate;
}

/// In-memory [`Model`]: the tracker plus the active filter.
#[derive(Debug, Clone)]
pub struct ModelManager {
    tracker: TaskTracker,
    filter: TaskPredicate,
    clock: fn() -> NaiveDate,
}

impl ModelManager {
    pub fn new(tracker: TaskTracker) -> Self {
        Self::with_clock(tracker, time::today)
    }

    /// Uses `clock` instead of the system date for date-relative filters.
    pub fn with_clock(tracker: TaskTracker, clock: fn() -> NaiveDate) -> Self {
        Self {
            tracker,
            filter: TaskPredicate::All,
            clock,
        }
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(TaskTracker::new())
    }
}

impl PartialEq for ModelManager {
    fn eq(&self, other: &Self) -> bool {
        self.tracker == other.tracker && self.filter == other.filter
    }
}

impl Model for ModelManager {
    fn tracker(&self) -> &TaskTracker {
        &self.tracker
    }

    fn reset_tracker(&mut self, tracker: TaskTracker) {
        self.tracker.reset_data(&tracker);
    }

    fn has_task(&self, task: &Task) -> bool {
        self.tracker.has_task(task)
    }

    fn has_daily_task(&self, task: &Task) -> bool {
        self.tracker.has_daily_task(task)
    }

    fn add_task(&mut self, task: Task) -> Result<(), TrackerError> {
        self.tracker.add_task(task)?;
        self.update_filtered_task_list(TaskPredicate::All);
        Ok(())
    }

    fn delete_task(&mut self, target: &Task) -> Result<(), TrackerError> {
        self.tracker.remove_task(target).map(|_| ())
    }

    fn set_task(&mut self, target: &Task, edited: Task) -> Result<(), TrackerError> {
        self.tracker.set_task(target, edited)
    }

    fn finish_task(&mut self, target: &Task) -> Result<(), TrackerError> {
        self.tracker.finish_task(target)
    }

    fn add_daily_task(&mut self, task: Task) -> Result<(), TrackerError> {
        self.tracker.add_daily_task(task)
    }

    fn delete_daily_task(&mut self, target: &Task) -> Result<(), TrackerError> {
        self.tracker.remove_daily_task(target).map(|_| ())
    }

    fn finish_daily_task(&mut self, target: &Task) -> Result<(), TrackerError> {
        self.tracker.finish_daily_task(target)
    }

    fn refresh_daily_tasks(&mut self, target: &Task, edited: Task) -> Result<(), TrackerError> {
        self.tracker.refresh_daily_tasks(target, edited)
    }

    fn sort_tasks(&mut self, strategy: SortStrategy) {
        let today = self.today();
        self.tracker.sort_tasks(|a, b| strategy.compare(a, b, today));
    }

    fn filtered_task_list(&self) -> Vec<&Task> {
        let today = self.today();
        self.tracker
            .tasks()
            .iter()
            .filter(|t| self.filter.test(t, today))
            .collect()
    }

    fn daily_task_list(&self) -> &[Task] {
        self.tracker.daily_tasks()
    }

    fn update_filtered_task_list(&mut self, predicate: TaskPredicate) {
        debug!(?predicate, "Updating task filter");
        self.filter = predicate;
    }

    fn filter(&self) -> &TaskPredicate {
        &self.filter
    }

    fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}
