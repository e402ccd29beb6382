//! Turns one line of user input into a [`TrackerCommand`].

pub mod index;
pub mod syntax;
pub mod task;
pub mod util;
pub mod view;

use tracing::debug;

use crate::command::filter::{
    DUE_BETWEEN_COMMAND_WORD, DUE_IN_COMMAND_WORD, FIND_COMMAND_WORD, LIST_COMMAND_WORD,
};
use crate::command::misc::{help_text, CLEAR_COMMAND_WORD, EXIT_COMMAND_WORD, HELP_COMMAND_WORD};
use crate::command::{
    add, daily, delete, edit, finish, notes, sort, ClearCommand, ExitCommand, HelpCommand,
    ListCommand, TrackerCommand,
};
use crate::error::ParseError;
use crate::input::expand_key;

pub const DEFAULT_DUE_IN_DAYS: u32 = 7;

const COMMAND_WORDS: &[&str] = &[
    add::COMMAND_WORD,
    edit::COMMAND_WORD,
    delete::COMMAND_WORD,
    finish::COMMAND_WORD,
    notes::COMMAND_WORD,
    daily::COMMAND_WORD,
    DUE_IN_COMMAND_WORD,
    DUE_BETWEEN_COMMAND_WORD,
    FIND_COMMAND_WORD,
    LIST_COMMAND_WORD,
    sort::COMMAND_WORD,
    CLEAR_COMMAND_WORD,
    HELP_COMMAND_WORD,
    EXIT_COMMAND_WORD,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerParser {
    default_due_in_days: u32,
}

impl Default for TrackerParser {
    fn default() -> Self {
        Self::new(DEFAULT_DUE_IN_DAYS)
    }
}

impl TrackerParser {
    pub fn new(default_due_in_days: u32) -> Self {
        Self { default_due_in_days }
    }

    /// Splits off the command word and hands the rest to that command's
    /// parser. Command words may be shortened to any unambiguous prefix.
    pub fn parse_command(&self, input: &str) -> Result<TrackerCommand, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::invalid_format(&help_text()));
        }

        let (word, args) = match input.find(char::is_whitespace) {
            Some(at) => input.split_at(at),
            None => (input, ""),
        };
        let word = expand_key(word, COMMAND_WORDS)
            .map_err(|_| ParseError::UnknownCommand(word.to_string()))?;

        let command = match word.as_str() {
            add::COMMAND_WORD => TrackerCommand::Add(task::parse_add(args)?),
            edit::COMMAND_WORD => TrackerCommand::Edit(task::parse_edit(args)?),
            notes::COMMAND_WORD => TrackerCommand::Notes(task::parse_notes(args)?),
            delete::COMMAND_WORD => TrackerCommand::Delete(index::parse_delete(args)?),
            finish::COMMAND_WORD => TrackerCommand::Finish(index::parse_finish(args)?),
            daily::COMMAND_WORD => TrackerCommand::DailyTodo(index::parse_daily_todo(args)?),
            sort::COMMAND_WORD => TrackerCommand::Sort(index::parse_sort(args)?),
            DUE_IN_COMMAND_WORD => {
                TrackerCommand::DueIn(view::parse_due_in(args, self.default_due_in_days)?)
            }
            DUE_BETWEEN_COMMAND_WORD => TrackerCommand::DueBetween(view::parse_due_between(args)?),
            FIND_COMMAND_WORD => TrackerCommand::Find(view::parse_find(args)?),
            LIST_COMMAND_WORD => TrackerCommand::List(ListCommand),
            CLEAR_COMMAND_WORD => TrackerCommand::Clear(ClearCommand),
            HELP_COMMAND_WORD => TrackerCommand::Help(HelpCommand),
            EXIT_COMMAND_WORD => TrackerCommand::Exit(ExitCommand),
            _ => return Err(ParseError::UnknownCommand(word.clone())),
        };

        debug!(?command, "Parsed command");
        Ok(command)
    }
}
