pub mod fields;
pub mod predicate;
pub mod sample;
pub mod sort;
pub mod tag;
pub mod task;
pub mod task_list;
pub mod tracker;

pub use fields::{DeadlineDate, DeadlineTime, ModuleCode, Notes, Status, TaskName, Weightage};
pub use predicate::TaskPredicate;
pub use sort::SortStrategy;
pub use tag::{PriorityTag, Tag};
pub use task::Task;
pub use task_list::UniqueTaskList;
pub use tracker::TaskTracker;
