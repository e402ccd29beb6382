use thiserror::Error;

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format!";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_INVALID_TASK_DISPLAYED_INDEX: &str = "The task index provided is invalid";
pub const MESSAGE_DUPLICATE_TASK: &str = "This task already exists in the task tracker.";

/// Raised while turning user text into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Arguments do not match the command grammar. Carries the command usage.
    #[error("{MESSAGE_INVALID_COMMAND_FORMAT}\n{usage}")]
    InvalidFormat { usage: String },

    #[error("{MESSAGE_UNKNOWN_COMMAND}: {0}")]
    UnknownCommand(String),

    #[error("{MESSAGE_INVALID_INDEX}")]
    InvalidIndex,

    /// A field value failed its own validation. Carries the constraint text.
    #[error("{0}")]
    InvalidValue(String),

    #[error("At least one field to edit must be provided.")]
    NotEdited,
}

impl ParseError {
    pub fn invalid_format(usage: &str) -> Self {
        ParseError::InvalidFormat {
            usage: usage.to_string(),
        }
    }
}

/// Violations of the task list invariants. Commands check for these
/// before mutating, so seeing one means a caller skipped validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("Operation would result in duplicate tasks")]
    DuplicateTask,

    #[error("Task not found: {0}")]
    TaskNotFound(String),
}

/// Raised by a syntactically valid command that cannot run against the
/// current model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{MESSAGE_INVALID_TASK_DISPLAYED_INDEX}")]
    InvalidTaskIndex,

    #[error("{MESSAGE_DUPLICATE_TASK}")]
    DuplicateTask,

    #[error("At least one field to edit must be provided.")]
    NotEdited,

    #[error("This task has already been marked as finished.")]
    AlreadyFinished,

    #[error("This task is already in the daily task list.")]
    DuplicateDailyTask,

    #[error(transparent)]
    Model(#[from] TrackerError),
}

/// Everything that can go wrong when running one line of user input.
#[derive(Debug, Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Could not save data to file: {0:#}")]
    Storage(#[source] anyhow::Error),
}
