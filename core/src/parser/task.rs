//! Parsers for the commands that build or change task fields.

use crate::command::{add, edit, notes, AddCommand, EditCommand, EditTaskDescriptor, NotesCommand};
use crate::error::ParseError;
use crate::input::tokenize;
use crate::model::task::Task;
use crate::parser::syntax::{
    Prefix, PREFIX_DEADLINE_DATE, PREFIX_DEADLINE_TIME, PREFIX_MODULE_CODE, PREFIX_NAME,
    PREFIX_NOTES, PREFIX_PRIORITY_TAG, PREFIX_TAG, PREFIX_WEIGHTAGE,
};
use crate::parser::util;

/// `add n/NAME mc/CODE d/DATE t/TIME w/WEIGHTAGE [ptag/PRIORITY] [pt/TAG]...`
///
/// New tasks start unfinished and without notes.
pub fn parse_add(args: &str) -> Result<AddCommand, ParseError> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_MODULE_CODE,
            PREFIX_WEIGHTAGE,
            PREFIX_DEADLINE_DATE,
            PREFIX_DEADLINE_TIME,
            PREFIX_TAG,
            PREFIX_PRIORITY_TAG,
        ],
    );

    let required = [
        PREFIX_NAME,
        PREFIX_MODULE_CODE,
        PREFIX_DEADLINE_DATE,
        PREFIX_DEADLINE_TIME,
        PREFIX_WEIGHTAGE,
    ];
    if !map.are_present(&required) || !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(add::MESSAGE_USAGE));
    }

    // presence was checked above
    let value = |prefix: Prefix| map.value(prefix).unwrap_or_default();

    let mut task = Task::new(
        util::parse_name(value(PREFIX_NAME))?,
        util::parse_module_code(value(PREFIX_MODULE_CODE))?,
        util::parse_deadline_date(value(PREFIX_DEADLINE_DATE))?,
        util::parse_deadline_time(value(PREFIX_DEADLINE_TIME))?,
        util::parse_weightage(value(PREFIX_WEIGHTAGE))?,
    )
    .with_tags(util::parse_tags(map.all_values(PREFIX_TAG))?);

    if let Some(priority) = map.value(PREFIX_PRIORITY_TAG) {
        task = task.with_priority_tag(util::parse_priority_tag(priority)?);
    }

    Ok(AddCommand::new(task))
}

/// `edit INDEX [n/NAME] [mc/CODE] [d/DATE] [t/TIME] [w/WEIGHTAGE] [r/NOTES]
/// [ptag/PRIORITY] [pt/TAG]...`
pub fn parse_edit(args: &str) -> Result<EditCommand, ParseError> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_MODULE_CODE,
            PREFIX_WEIGHTAGE,
            PREFIX_DEADLINE_DATE,
            PREFIX_DEADLINE_TIME,
            PREFIX_NOTES,
            PREFIX_TAG,
            PREFIX_PRIORITY_TAG,
        ],
    );

    let index = util::parse_index(map.preamble())
        .map_err(|_| ParseError::invalid_format(edit::MESSAGE_USAGE))?;

    let descriptor = EditTaskDescriptor {
        name: map.value(PREFIX_NAME).map(util::parse_name).transpose()?,
        module_code: map
            .value(PREFIX_MODULE_CODE)
            .map(util::parse_module_code)
            .transpose()?,
        deadline_date: map
            .value(PREFIX_DEADLINE_DATE)
            .map(util::parse_deadline_date)
            .transpose()?,
        deadline_time: map
            .value(PREFIX_DEADLINE_TIME)
            .map(util::parse_deadline_time)
            .transpose()?,
        weightage: map.value(PREFIX_WEIGHTAGE).map(util::parse_weightage).transpose()?,
        notes: map.value(PREFIX_NOTES).map(util::parse_notes),
        tags: util::parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
        priority_tag: map
            .value(PREFIX_PRIORITY_TAG)
            .map(util::parse_priority_tag)
            .transpose()?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }

    Ok(EditCommand::new(index, descriptor))
}

/// `notes INDEX r/[NOTES]`
pub fn parse_notes(args: &str) -> Result<NotesCommand, ParseError> {
    let map = tokenize(args, &[PREFIX_NOTES]);
    let index = util::parse_index(map.preamble())
        .map_err(|_| ParseError::invalid_format(notes::MESSAGE_USAGE))?;
    let notes = map
        .value(PREFIX_NOTES)
        .ok_or_else(|| ParseError::invalid_format(notes::MESSAGE_USAGE))?;
    Ok(NotesCommand::new(index, util::parse_notes(notes)))
}
