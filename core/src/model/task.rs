use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::fields::{
    DeadlineDate, DeadlineTime, ModuleCode, Notes, Status, TaskName, Weightage,
};
use crate::model::tag::{PriorityTag, Tag};

/// A tracked assignment.
///
/// Tasks are immutable values: every change builds a new `Task` that
/// replaces the old one in its list.
///
/// Two comparisons exist and they are not interchangeable:
/// - [`Task::is_same_task`] (identity): same name and module code. Used for
///   duplicate detection.
/// - `==` (full equality): every field matches.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    name: TaskName,
    module_code: ModuleCode,
    deadline_date: DeadlineDate,
    deadline_time: DeadlineTime,
    #[serde(default)]
    status: Status,
    weightage: Weightage,
    #[serde(default)]
    notes: Notes,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    priority_tag: PriorityTag,
}

impl Task {
    /// Builds an unfinished task with empty notes, no tags and the default
    /// priority.
    pub fn new(
        name: TaskName,
        module_code: ModuleCode,
        deadline_date: DeadlineDate,
        deadline_time: DeadlineTime,
        weightage: Weightage,
    ) -> Self {
        Self {
            name,
            module_code,
            deadline_date,
            deadline_time,
            status: Status::default(),
            weightage,
            notes: Notes::default(),
            tags: BTreeSet::new(),
            priority_tag: PriorityTag::default(),
        }
    }

    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    pub fn with_notes(self, notes: Notes) -> Self {
        Self { notes, ..self }
    }

    pub fn with_tags(self, tags: BTreeSet<Tag>) -> Self {
        Self { tags, ..self }
    }

    pub fn with_priority_tag(self, priority_tag: PriorityTag) -> Self {
        Self { priority_tag, ..self }
    }

    pub fn name(&self) -> &TaskName {
        &self.name
    }

    pub fn module_code(&self) -> &ModuleCode {
        &self.module_code
    }

    pub fn deadline_date(&self) -> DeadlineDate {
        self.deadline_date
    }

    pub fn deadline_time(&self) -> DeadlineTime {
        self.deadline_time
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn weightage(&self) -> Weightage {
        self.weightage
    }

    pub fn notes(&self) -> &Notes {
        &self.notes
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn priority_tag(&self) -> PriorityTag {
        self.priority_tag
    }

    /// Identity comparison: name and module code only.
    pub fn is_same_task(&self, other: &Task) -> bool {
        self.name == other.name && self.module_code == other.module_code
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Module: {}; Deadline: {} {}; Status: {}; Weightage: {}; Priority: {}",
            self.name,
            self.module_code,
            self.deadline_date,
            self.deadline_time,
            self.status,
            self.weightage,
            self.priority_tag
        )?;
        if !self.notes.is_empty() {
            write!(f, "; Notes: {}", self.notes)?;
        }
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
            write!(f, "; Tags: [{}]", tags.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{TaskBuilder, CS2040, CS2103};

    #[test]
    fn test_is_same_task() {
        let task = CS2103.build();

        assert!(task.is_same_task(&task));
        assert!(!task.is_same_task(&CS2040.build()));

        // every other field differs, identity still holds
        let edited = TaskBuilder::from(&task)
            .date("31-12-2030")
            .time("23:59")
            .weightage(99)
            .notes("changed")
            .tags(&["other"])
            .priority("HIGH")
            .build()
            .with_status(Status::Finished);
        assert!(task.is_same_task(&edited));
        assert_ne!(task, edited);

        // different module code, same name
        let other_module = TaskBuilder::from(&task).module("CS9999").build();
        assert!(!task.is_same_task(&other_module));

        // different name, same module code
        let other_name = TaskBuilder::from(&task).name("Something else").build();
        assert!(!task.is_same_task(&other_name));
    }

    #[test]
    fn test_full_equality() {
        let task = CS2103.build();
        assert_eq!(task, task.clone());
        assert_ne!(task, task.clone().with_notes(Notes::new("read chapter 3")));
        assert_ne!(task, task.clone().with_priority_tag(PriorityTag::Low));
        assert_ne!(task, task.clone().with_status(Status::Finished));
        assert_ne!(task, TaskBuilder::from(&task).date("04-04-2021").build());
        assert_ne!(task, TaskBuilder::from(&task).time("23:59").build());
        assert_ne!(task, TaskBuilder::from(&task).weightage(6).build());
        assert_ne!(task, TaskBuilder::from(&task).tags(&["core", "quiz"]).build());
    }

    #[test]
    fn test_display() {
        let task = TaskBuilder::new("Week 10 Quiz", "CS2103")
            .date("01-04-2021")
            .time("10:10")
            .weightage(5)
            .tags(&["core"])
            .build();
        assert_eq!(
            task.to_string(),
            "Week 10 Quiz; Module: CS2103; Deadline: 01-04-2021 10:10; Status: Unfinished; \
             Weightage: 5%; Priority: LOW; Tags: [core]"
        );
    }

    #[test]
    fn test_serde_defaults_optional_fields() {
        let json = r#"{
            "name": "Tutorial 6",
            "moduleCode": "CS1010",
            "deadlineDate": "31-03-2021",
            "deadlineTime": "10:10",
            "weightage": 20
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status(), Status::Unfinished);
        assert!(task.notes().is_empty());
        assert!(task.tags().is_empty());
        assert_eq!(task.priority_tag(), PriorityTag::Low);
    }
}
