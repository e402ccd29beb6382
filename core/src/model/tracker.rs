use std::cmp::Ordering;

use crate::error::TrackerError;
use crate::model::task::Task;
use crate::model::task_list::UniqueTaskList;

/// Root of the task data: the authoritative task list plus the daily list.
///
/// Every task in `daily_tasks` must have an identity match in `tasks`.
/// The two lists are not linked automatically; whoever replaces or removes
/// a task in `tasks` must mirror the change with
/// [`TaskTracker::refresh_daily_tasks`] or [`TaskTracker::remove_daily_task`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskTracker {
    tasks: UniqueTaskList,
    daily_tasks: UniqueTaskList,
}

impl TaskTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> Result<(), TrackerError> {
        self.tasks.set_tasks(tasks)
    }

    pub fn set_daily_tasks(&mut self, daily_tasks: Vec<Task>) -> Result<(), TrackerError> {
        self.daily_tasks.set_tasks(daily_tasks)
    }

    /// Replaces both lists with the content of `other`.
    pub fn reset_data(&mut self, other: &TaskTracker) {
        self.tasks = other.tasks.clone();
        self.daily_tasks = other.daily_tasks.clone();
    }

    pub fn sort_tasks<F>(&mut self, compare: F)
    where
        F: FnMut(&Task, &Task) -> Ordering,
    {
        self.tasks.sort_by(compare);
    }

    pub fn has_task(&self, task: &Task) -> bool {
        self.tasks.contains(task)
    }

    pub fn has_daily_task(&self, task: &Task) -> bool {
        self.daily_tasks.contains(task)
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), TrackerError> {
        self.tasks.add(task)
    }

    pub fn add_daily_task(&mut self, task: Task) -> Result<(), TrackerError> {
        self.daily_tasks.add(task)
    }

    pub fn set_task(&mut self, target: &Task, edited: Task) -> Result<(), TrackerError> {
        self.tasks.set_task(target, edited)
    }

    pub fn set_daily_task(&mut self, target: &Task, edited: Task) -> Result<(), TrackerError> {
        self.daily_tasks.set_task(target, edited)
    }

    pub fn remove_task(&mut self, target: &Task) -> Result<Task, TrackerError> {
        self.tasks.remove(target)
    }

    pub fn remove_daily_task(&mut self, target: &Task) -> Result<Task, TrackerError> {
        self.daily_tasks.remove(target)
    }

    pub fn finish_task(&mut self, target: &Task) -> Result<(), TrackerError> {
        self.tasks.finish(target)
    }

    pub fn finish_daily_task(&mut self, target: &Task) -> Result<(), TrackerError> {
        self.daily_tasks.finish(target)
    }

    /// Mirrors a replacement made in `tasks` into `daily_tasks`.
    /// No-op when `target` is not in the daily list.
    ///
    /// The daily copy is looked up by identity, so a stale daily copy of
    /// `target` (same name and module, older field values) is replaced too.
    pub fn refresh_daily_tasks(&mut self, target: &Task, edited: Task) -> Result<(), TrackerError> {
        let stale = self
            .daily_tasks
            .iter()
            .find(|t| t.is_same_task(target))
            .cloned();
        match stale {
            Some(stale) => self.daily_tasks.set_task(&stale, edited),
            None => Ok(()),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    pub fn daily_tasks(&self) -> &[Task] {
        self.daily_tasks.as_slice()
    }

    /// True when every daily task has an identity match in the main list.
    pub fn is_daily_subset(&self) -> bool {
        self.daily_tasks.iter().all(|t| self.tasks.contains(t))
    }
}
