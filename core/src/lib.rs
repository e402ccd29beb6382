pub mod command;
pub mod config;
pub mod error;
pub mod index;
pub mod input;
pub mod model;
pub mod parser;
pub mod repository;
pub mod service;
pub mod time;

#[cfg(test)]
mod testutil;

pub use command::misc::help_text;
pub use command::{CommandResult, TrackerCommand};
pub use config::{data_dir, Config};
pub use error::{CommandError, LogicError, ParseError, TrackerError};
pub use index::Index;
pub use model::sample::sample_tracker;
pub use model::{SortStrategy, Task, TaskPredicate, TaskTracker};
pub use parser::TrackerParser;
pub use repository::{FileTrackerRepository, TrackerRepository};
pub use service::dto::TaskDto;
pub use service::{LogicManager, Model, ModelManager};
