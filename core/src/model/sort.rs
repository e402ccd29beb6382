use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::model::tag::PriorityTag;
use crate::model::task::Task;
use crate::time;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortStrategy {
    /// Earliest deadline (date, then time) first.
    #[default]
    Deadline,
    /// Heaviest weightage first.
    Weightage,
    ModuleCode,
    Name,
    /// Highest priority tag first.
    Priority,
    /// Highest urgency score first, see [`urgency_score`].
    Urgency,
}

// Coefficients
const COEFFICIENT_DUE: f64 = 12.0;
const COEFFICIENT_PRIORITY: f64 = 6.0;
const COEFFICIENT_WEIGHTAGE: f64 = 5.0;

impl SortStrategy {
    /// Total order for this strategy. Ties fall back to deadline, then name,
    /// so the result does not depend on the previous list order.
    pub fn compare(&self, a: &Task, b: &Task, today: NaiveDate) -> Ordering {
        let primary = match self {
            SortStrategy::Deadline => Ordering::Equal,
            SortStrategy::Weightage => b.weightage().cmp(&a.weightage()),
            SortStrategy::ModuleCode => a.module_code().cmp(b.module_code()),
            SortStrategy::Name => a.name().cmp(b.name()),
            SortStrategy::Priority => b.priority_tag().cmp(&a.priority_tag()),
            SortStrategy::Urgency => {
                let score_a = urgency_score(a, today);
                let score_b = urgency_score(b, today);
                score_b.partial_cmp(&score_a).unwrap_or(Ordering::Equal)
            }
        };
        primary
            .then_with(|| deadline_order(a, b))
            .then_with(|| a.name().cmp(b.name()))
    }

    pub fn description(&self) -> &'static str {
        match self {
            SortStrategy::Deadline => "deadline",
            SortStrategy::Weightage => "weightage",
            SortStrategy::ModuleCode => "module code",
            SortStrategy::Name => "task name",
            SortStrategy::Priority => "priority",
            SortStrategy::Urgency => "urgency",
        }
    }
}

fn deadline_order(a: &Task, b: &Task) -> Ordering {
    a.deadline_date()
        .cmp(&b.deadline_date())
        .then_with(|| a.deadline_time().cmp(&b.deadline_time()))
}

/// Scores how pressing a task is. Finished tasks always score lowest.
pub fn urgency_score(task: &Task, today: NaiveDate) -> f64 {
    if task.status().is_finished() {
        return -100.0;
    }

    let mut score = 0.0;

    let days = time::days_until(today, task.deadline_date().date());
    if days < 0 {
        score += COEFFICIENT_DUE * 2.0;
    } else if days < 7 {
        score += COEFFICIENT_DUE;
        score += (7.0 - days as f64) * 0.5;
    } else if days < 14 {
        score += COEFFICIENT_DUE * 0.5;
    } else {
        score += COEFFICIENT_DUE * 0.2;
    }

    match task.priority_tag() {
        PriorityTag::High => score += COEFFICIENT_PRIORITY,
        PriorityTag::Medium => score += COEFFICIENT_PRIORITY * 0.5,
        PriorityTag::Low => score += COEFFICIENT_PRIORITY * 0.1,
    }

    score += task.weightage().value() as f64 / 100.0 * COEFFICIENT_WEIGHTAGE;

    score
}
