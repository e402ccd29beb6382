//! Parsers for commands whose arguments are an index and/or a flag.

use crate::command::{
    daily, delete, finish, sort, DailyTodoCommand, DeleteCommand, FinishCommand, OperationFlag,
    SortCommand,
};
use crate::error::ParseError;
use crate::parser::util;

pub fn parse_delete(args: &str) -> Result<DeleteCommand, ParseError> {
    util::parse_index(args)
        .map(DeleteCommand::new)
        .map_err(|_| ParseError::invalid_format(delete::MESSAGE_USAGE))
}

pub fn parse_finish(args: &str) -> Result<FinishCommand, ParseError> {
    util::parse_index(args)
        .map(FinishCommand::new)
        .map_err(|_| ParseError::invalid_format(finish::MESSAGE_USAGE))
}

/// `doToday -a INDEX` or `doToday -r INDEX`
pub fn parse_daily_todo(args: &str) -> Result<DailyTodoCommand, ParseError> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [flag, index] = parts.as_slice() else {
        return Err(ParseError::invalid_format(daily::MESSAGE_USAGE));
    };
    let invalid = |_| ParseError::invalid_format(daily::MESSAGE_USAGE);
    let flag = OperationFlag::parse(flag).map_err(invalid)?;
    let index = util::parse_index(index).map_err(invalid)?;
    Ok(DailyTodoCommand::new(index, flag))
}

/// `sort FLAG`
pub fn parse_sort(args: &str) -> Result<SortCommand, ParseError> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [flag] = parts.as_slice() else {
        return Err(ParseError::invalid_format(sort::MESSAGE_USAGE));
    };
    sort::parse_sort_flag(flag)
        .map(SortCommand::new)
        .map_err(|_| ParseError::invalid_format(sort::MESSAGE_USAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;
    use crate::model::sort::SortStrategy;

    fn index(i: usize) -> Index {
        Index::from_one_based(i).unwrap()
    }

    #[test]
    fn test_parse_delete_and_finish() {
        assert_eq!(parse_delete(" 1 ").unwrap(), DeleteCommand::new(index(1)));
        assert_eq!(parse_finish("4").unwrap(), FinishCommand::new(index(4)));
        assert_eq!(
            parse_delete("a"),
            Err(ParseError::invalid_format(delete::MESSAGE_USAGE))
        );
        assert_eq!(
            parse_finish("1 2"),
            Err(ParseError::invalid_format(finish::MESSAGE_USAGE))
        );
    }

    #[test]
    fn test_parse_daily_todo() {
        assert_eq!(
            parse_daily_todo("-a 2").unwrap(),
            DailyTodoCommand::new(index(2), OperationFlag::Add)
        );
        assert_eq!(
            parse_daily_todo("  -r   1 ").unwrap(),
            DailyTodoCommand::new(index(1), OperationFlag::Remove)
        );

        let invalid: Result<DailyTodoCommand, ParseError> =
            Err(ParseError::invalid_format(daily::MESSAGE_USAGE));
        assert_eq!(parse_daily_todo("-a"), invalid);
        assert_eq!(parse_daily_todo("2 -a"), invalid);
        assert_eq!(parse_daily_todo("-x 2"), invalid);
        assert_eq!(parse_daily_todo("-a 0"), invalid);
        assert_eq!(parse_daily_todo("-a 1 2"), invalid);
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort("-w").unwrap(), SortCommand::new(SortStrategy::Weightage));
        assert_eq!(parse_sort(" -u ").unwrap(), SortCommand::new(SortStrategy::Urgency));
        assert_eq!(parse_sort(""), Err(ParseError::invalid_format(sort::MESSAGE_USAGE)));
        assert_eq!(parse_sort("-w -n"), Err(ParseError::invalid_format(sort::MESSAGE_USAGE)));
    }
}
