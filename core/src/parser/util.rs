use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::ParseError;
use crate::index::Index;
use crate::model::fields::{DeadlineDate, DeadlineTime, ModuleCode, Notes, TaskName, Weightage};
use crate::model::tag::{PriorityTag, Tag};
use crate::time;

/// Parses a one-based, strictly positive index.
pub fn parse_index(input: &str) -> Result<Index, ParseError> {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    input
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

pub fn parse_name(input: &str) -> Result<TaskName, ParseError> {
    TaskName::new(input)
}

pub fn parse_module_code(input: &str) -> Result<ModuleCode, ParseError> {
    ModuleCode::new(input)
}

pub fn parse_deadline_date(input: &str) -> Result<DeadlineDate, ParseError> {
    DeadlineDate::new(input)
}

pub fn parse_deadline_time(input: &str) -> Result<DeadlineTime, ParseError> {
    DeadlineTime::new(input)
}

pub fn parse_weightage(input: &str) -> Result<Weightage, ParseError> {
    Weightage::parse(input)
}

pub fn parse_notes(input: &str) -> Notes {
    Notes::new(input)
}

pub fn parse_priority_tag(input: &str) -> Result<PriorityTag, ParseError> {
    PriorityTag::parse(input)
}

pub fn parse_tags(inputs: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    inputs.iter().map(|t| Tag::new(t)).collect()
}

/// Same as [`parse_tags`], except that a single empty value (`pt/`) means
/// "clear all tags" and yields an empty set.
pub fn parse_tags_for_edit(inputs: &[String]) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    match inputs {
        [] => Ok(None),
        [only] if only.trim().is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(inputs).map(Some),
    }
}

/// Parses a plain `dd-mm-yyyy` date used as a range bound.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    time::parse_date(input)
        .map_err(|_| ParseError::InvalidValue(DeadlineDate::CONSTRAINTS.to_string()))
}

pub const MESSAGE_INVALID_COUNT: &str = "Number of days or weeks should be a non-negative integer";

pub fn parse_count(input: &str) -> Result<u32, ParseError> {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidValue(MESSAGE_INVALID_COUNT.to_string()));
    }
    input
        .parse()
        .map_err(|_| ParseError::InvalidValue(MESSAGE_INVALID_COUNT.to_string()))
}
