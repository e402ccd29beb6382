use std::cmp::Ordering;

use crate::error::TrackerError;
use crate::model::fields::Status;
use crate::model::task::Task;

/// An ordered list of tasks in which no two tasks are identity-equal
/// (see [`Task::is_same_task`]).
///
/// Insertion order is kept until [`UniqueTaskList::sort_by`] is called.
/// Targets of `set_task`, `remove` and `finish` are located by full
/// equality, so callers must pass the exact task they read from the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueTaskList {
    tasks: Vec<Task>,
}

impl UniqueTaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, task: &Task) -> bool {
        self.tasks.iter().any(|t| t.is_same_task(task))
    }

    pub fn add(&mut self, task: Task) -> Result<(), TrackerError> {
        if self.contains(&task) {
            return Err(TrackerError::DuplicateTask);
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Replaces `target` with `edited` at the same position.
    pub fn set_task(&mut self, target: &Task, edited: Task) -> Result<(), TrackerError> {
        let pos = self.position(target)?;
        if !target.is_same_task(&edited) && self.contains(&edited) {
            return Err(TrackerError::DuplicateTask);
        }
        self.tasks[pos] = edited;
        Ok(())
    }

    pub fn remove(&mut self, target: &Task) -> Result<Task, TrackerError> {
        let pos = self.position(target)?;
        Ok(self.tasks.remove(pos))
    }

    /// Marks `target` as finished in place.
    pub fn finish(&mut self, target: &Task) -> Result<(), TrackerError> {
        let pos = self.position(target)?;
        let finished = self.tasks[pos].clone().with_status(Status::Finished);
        self.tasks[pos] = finished;
        Ok(())
    }

    /// Replaces the whole content. Fails without modifying anything if
    /// `tasks` holds identity duplicates.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> Result<(), TrackerError> {
        if !are_tasks_unique(&tasks) {
            return Err(TrackerError::DuplicateTask);
        }
        self.tasks = tasks;
        Ok(())
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Task, &Task) -> Ordering,
    {
        // stable, so ties keep their current relative order
        self.tasks.sort_by(compare);
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, target: &Task) -> Result<usize, TrackerError> {
        self.tasks
            .iter()
            .position(|t| t == target)
            .ok_or_else(|| TrackerError::TaskNotFound(target.name().to_string()))
    }
}

impl<'a> IntoIterator for &'a UniqueTaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

fn are_tasks_unique(tasks: &[Task]) -> bool {
    tasks
        .iter()
        .enumerate()
        .all(|(i, a)| tasks[i + 1..].iter().all(|b| !a.is_same_task(b)))
}
