use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::sort::urgency_score;
use crate::model::task::Task;
use crate::time;

/// A task flattened into display strings, plus values derived from today.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskDto {
    /// One-based position in the list it was taken from.
    pub index: usize,
    pub name: String,
    pub module_code: String,
    pub deadline: String,
    /// Negative once the deadline has passed.
    pub days_left: i64,
    pub status: String,
    pub weightage: String,
    pub priority: String,
    pub tags: Vec<String>,
    pub notes: String,
    pub is_daily: bool,

    // Score for display
    pub urgency: f64,
}

impl TaskDto {
    pub fn from_entity(index: usize, task: &Task, today: NaiveDate, is_daily: bool) -> Self {
        Self {
            index,
            name: task.name().to_string(),
            module_code: task.module_code().to_string(),
            deadline: format!("{} {}", task.deadline_date(), task.deadline_time()),
            days_left: time::days_until(today, task.deadline_date().date()),
            status: task.status().to_string(),
            weightage: task.weightage().to_string(),
            priority: task.priority_tag().to_string(),
            tags: task.tags().iter().map(|t| t.to_string()).collect(),
            notes: task.notes().to_string(),
            is_daily,
            urgency: urgency_score(task, today),
        }
    }
}
