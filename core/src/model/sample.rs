//! Sample data for a first run without a data file.

use std::collections::BTreeSet;

use crate::error::ParseError;
use crate::model::fields::{DeadlineDate, DeadlineTime, ModuleCode, Status, TaskName, Weightage};
use crate::model::tag::Tag;
use crate::model::task::Task;
use crate::model::tracker::TaskTracker;

// (name, module, date, time, weightage, finished, tags)
const SAMPLE_TASKS: &[(&str, &str, &str, &str, u8, bool, &[&str])] = &[
    ("Week 10 Quiz", "CS2103", "01-04-2021", "10:10", 0, false, &["core"]),
    ("Take Home lab 1", "CS2040", "10-04-2021", "10:10", 10, false, &["core", "difficult"]),
    ("Tutorial 6", "CS1010", "31-03-2021", "10:10", 20, true, &["core"]),
    ("Tutorial 5", "CS2030", "30-04-2021", "10:10", 10, false, &["core"]),
    ("Weekly Readings", "CS3243", "12-05-2021", "10:10", 20, false, &["specialization"]),
    ("Write Tests", "CS3244", "07-04-2021", "10:10", 15, true, &["specialization"]),
];

pub fn sample_tasks() -> Result<Vec<Task>, ParseError> {
    SAMPLE_TASKS
        .iter()
        .map(|&(name, module, date, time, weightage, finished, tags)| {
            let status = if finished { Status::Finished } else { Status::Unfinished };
            Ok(Task::new(
                TaskName::new(name)?,
                ModuleCode::new(module)?,
                DeadlineDate::new(date)?,
                DeadlineTime::new(time)?,
                Weightage::new(weightage)?,
            )
            .with_status(status)
            .with_tags(tag_set(tags)?))
        })
        .collect()
}

pub fn sample_tracker() -> anyhow::Result<TaskTracker> {
    let mut tracker = TaskTracker::new();
    tracker.set_tasks(sample_tasks()?)?;
    Ok(tracker)
}

pub fn tag_set(names: &[&str]) -> Result<BTreeSet<Tag>, ParseError> {
    names.iter().map(|n| Tag::new(n)).collect()
}
