//! Fixtures shared by the unit tests.

use chrono::NaiveDate;

use crate::model::fields::{DeadlineDate, DeadlineTime, ModuleCode, Notes, TaskName, Weightage};
use crate::model::sample::tag_set;
use crate::model::tag::PriorityTag;
use crate::model::task::Task;
use crate::model::tracker::TaskTracker;
use crate::service::model::ModelManager;

/// The fixed date typical tasks are laid out around.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 4, 1).unwrap()
}

pub struct TypicalTask {
    pub name: &'static str,
    pub module: &'static str,
    pub date: &'static str,
    pub weightage: u8,
    pub tags: &'static [&'static str],
    pub priority: &'static str,
}

impl TypicalTask {
    pub fn build(&self) -> Task {
        self.builder().build()
    }

    pub fn builder(&self) -> TaskBuilder {
        TaskBuilder::new(self.name, self.module)
            .date(self.date)
            .weightage(self.weightage)
            .tags(self.tags)
            .priority(self.priority)
    }
}

/// Due in 2 days.
pub const CS2103: TypicalTask = TypicalTask {
    name: "Week 10 Quiz",
    module: "CS2103",
    date: "03-04-2021",
    weightage: 5,
    tags: &["core"],
    priority: "HIGH",
};

/// Due in 9 days.
pub const CS2040: TypicalTask = TypicalTask {
    name: "Take Home Lab 1",
    module: "CS2040",
    date: "10-04-2021",
    weightage: 10,
    tags: &["core", "difficult"],
    priority: "MEDIUM",
};

/// Overdue by a day.
pub const CS1010E: TypicalTask = TypicalTask {
    name: "Tutorial 6",
    module: "CS1010E",
    date: "31-03-2021",
    weightage: 20,
    tags: &["core"],
    priority: "LOW",
};

/// Due in 29 days.
pub const CS2030: TypicalTask = TypicalTask {
    name: "Tutorial 5",
    module: "CS2030",
    date: "30-04-2021",
    weightage: 10,
    tags: &[],
    priority: "LOW",
};

/// Due in 40 days.
pub const CS3244: TypicalTask = TypicalTask {
    name: "Write Tests",
    module: "CS3244",
    date: "11-05-2021",
    weightage: 15,
    tags: &["specialization"],
    priority: "MEDIUM",
};

/// Not part of the typical tracker.
pub const CS2100: TypicalTask = TypicalTask {
    name: "Problem Set 3",
    module: "CS2100",
    date: "05-04-2021",
    weightage: 25,
    tags: &[],
    priority: "HIGH",
};

pub fn typical_tasks() -> Vec<Task> {
    vec![
        CS2103.build(),
        CS2040.build(),
        CS1010E.build(),
        CS2030.build(),
        CS3244.build(),
    ]
}

/// All typical tasks in the main list, empty daily list.
pub fn typical_tracker() -> TaskTracker {
    let mut tracker = TaskTracker::new();
    tracker.set_tasks(typical_tasks()).unwrap();
    tracker
}

pub fn typical_model() -> ModelManager {
    ModelManager::with_clock(typical_tracker(), today)
}

#[derive(Debug, Clone)]
pub struct TaskBuilder {
    name: String,
    module: String,
    date: String,
    time: String,
    weightage: u8,
    notes: String,
    tags: Vec<String>,
    priority: String,
}

impl TaskBuilder {
    pub fn new(name: &str, module: &str) -> Self {
        Self {
            name: name.to_string(),
            module: module.to_string(),
            date: "01-04-2021".to_string(),
            time: "10:10".to_string(),
            weightage: 0,
            notes: String::new(),
            tags: Vec::new(),
            priority: "LOW".to_string(),
        }
    }

    /// Starts from an existing task. The status is not copied.
    pub fn from(task: &Task) -> Self {
        Self {
            name: task.name().to_string(),
            module: task.module_code().to_string(),
            date: task.deadline_date().to_string(),
            time: task.deadline_time().to_string(),
            weightage: task.weightage().value(),
            notes: task.notes().to_string(),
            tags: task.tags().iter().map(|t| t.to_string()).collect(),
            priority: task.priority_tag().to_string(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn module(mut self, module: &str) -> Self {
        self.module = module.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn time(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    pub fn weightage(mut self, weightage: u8) -> Self {
        self.weightage = weightage;
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn priority(mut self, priority: &str) -> Self {
        self.priority = priority.to_string();
        self
    }

    pub fn build(self) -> Task {
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        Task::new(
            TaskName::new(&self.name).unwrap(),
            ModuleCode::new(&self.module).unwrap(),
            DeadlineDate::new(&self.date).unwrap(),
            DeadlineTime::new(&self.time).unwrap(),
            Weightage::new(self.weightage).unwrap(),
        )
        .with_notes(Notes::new(&self.notes))
        .with_tags(tag_set(&tags).unwrap())
        .with_priority_tag(PriorityTag::parse(&self.priority).unwrap())
    }
}
