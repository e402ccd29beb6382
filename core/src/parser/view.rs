//! Parsers for the commands that only change which tasks are shown.

use crate::command::filter::{DUE_BETWEEN_USAGE, DUE_IN_USAGE, FIND_USAGE};
use crate::command::{DueBetweenCommand, DueInCommand, FindCommand};
use crate::error::ParseError;
use crate::input::tokenize;
use crate::parser::syntax::{PREFIX_DAY, PREFIX_END_DATE, PREFIX_START_DATE, PREFIX_WEEK};
use crate::parser::util;

pub const MESSAGE_START_AFTER_END: &str = "The start date must not be after the end date";

/// `dueIn [day/DAYS] [week/WEEKS]`. With neither, `default_days` is used.
pub fn parse_due_in(args: &str, default_days: u32) -> Result<DueInCommand, ParseError> {
    let map = tokenize(args, &[PREFIX_DAY, PREFIX_WEEK]);
    if !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(DUE_IN_USAGE));
    }

    match (map.value(PREFIX_DAY), map.value(PREFIX_WEEK)) {
        (None, None) => Ok(DueInCommand::new(default_days)),
        (Some(days), None) => Ok(DueInCommand::new(util::parse_count(days)?)),
        (None, Some(weeks)) => Ok(DueInCommand::weeks(util::parse_count(weeks)?)),
        (Some(_), Some(_)) => Err(ParseError::invalid_format(DUE_IN_USAGE)),
    }
}

/// `dueBetween start/DATE end/DATE`
pub fn parse_due_between(args: &str) -> Result<DueBetweenCommand, ParseError> {
    let map = tokenize(args, &[PREFIX_START_DATE, PREFIX_END_DATE]);
    let (Some(start), Some(end)) = (map.value(PREFIX_START_DATE), map.value(PREFIX_END_DATE)) else {
        return Err(ParseError::invalid_format(DUE_BETWEEN_USAGE));
    };
    if !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(DUE_BETWEEN_USAGE));
    }

    let start = util::parse_date(start)?;
    let end = util::parse_date(end)?;
    if start > end {
        return Err(ParseError::InvalidValue(MESSAGE_START_AFTER_END.to_string()));
    }
    Ok(DueBetweenCommand::new(start, end))
}

/// `find KEYWORD [MORE_KEYWORDS]...`
pub fn parse_find(args: &str) -> Result<FindCommand, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(FIND_USAGE));
    }
    Ok(FindCommand::new(keywords))
}
