//! Validated value objects that make up a [`Task`](crate::model::task::Task).
//!
//! Every type here can only be built from input that passes its validation,
//! and re-validates when deserialized, so a `Task` never holds a malformed
//! field. Failures are [`ParseError::InvalidValue`] carrying the constraint
//! text shown to the user.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::time;

/// Implements the string conversions serde and `Display` need for a
/// validated newtype that has a `new(&str)` constructor and an `as_str()`.
macro_rules! string_conversions {
    ($ty:ident) => {
        impl TryFrom<String> for $ty {
            type Error = ParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $ty::new(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
pub(crate) use string_conversions;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskName(String);

impl TaskName {
    pub const CONSTRAINTS: &'static str = "Task names should start with a letter or digit, \
        contain only letters, digits, spaces and the symbols - _ ' ( ) & . , : #, \
        and it should not be blank";

    const SYMBOLS: &'static str = "-_'()&.,:#";

    pub fn new(name: &str) -> Result<Self, ParseError> {
        let name = name.trim();
        if !Self::is_valid(name) {
            return Err(ParseError::InvalidValue(Self::CONSTRAINTS.to_string()));
        }
        Ok(TaskName(name.to_string()))
    }

    pub fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_alphanumeric() => chars
                .all(|c| c.is_alphanumeric() || c == ' ' || Self::SYMBOLS.contains(c)),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_conversions!(TaskName);

/// University module code such as `CS2103` or `CS1010E`, stored upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleCode(String);

impl ModuleCode {
    pub const CONSTRAINTS: &'static str = "Module codes should consist of 2 or 3 letters, \
        followed by 4 digits and an optional letter, e.g. CS2103 or CS1010E";

    pub fn new(code: &str) -> Result<Self, ParseError> {
        let code = code.trim().to_uppercase();
        if !Self::is_valid(&code) {
            return Err(ParseError::InvalidValue(Self::CONSTRAINTS.to_string()));
        }
        Ok(ModuleCode(code))
    }

    pub fn is_valid(code: &str) -> bool {
        let letters = code.chars().take_while(|c| c.is_ascii_alphabetic()).count();
        if !(2..=3).contains(&letters) {
            return false;
        }
        let rest = &code[letters..];
        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits != 4 {
            return false;
        }
        let suffix = &rest[digits..];
        suffix.is_empty() || (suffix.len() == 1 && suffix.chars().all(|c| c.is_ascii_alphabetic()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_conversions!(ModuleCode);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeadlineDate(NaiveDate);

impl DeadlineDate {
    pub const CONSTRAINTS: &'static str =
        "Deadline dates should be in the format dd-mm-yyyy and be a valid calendar date";

    pub fn new(date: &str) -> Result<Self, ParseError> {
        time::parse_date(date)
            .map(DeadlineDate)
            .map_err(|_| ParseError::InvalidValue(Self::CONSTRAINTS.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<String> for DeadlineDate {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DeadlineDate::new(&value)
    }
}

impl From<DeadlineDate> for String {
    fn from(value: DeadlineDate) -> Self {
        time::format_date(value.0)
    }
}

impl fmt::Display for DeadlineDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&time::format_date(self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeadlineTime(NaiveTime);

impl DeadlineTime {
    pub const CONSTRAINTS: &'static str =
        "Deadline times should be in the 24-hour format HH:MM, e.g. 09:30 or 23:59";

    pub fn new(time: &str) -> Result<Self, ParseError> {
        time::parse_time(time)
            .map(DeadlineTime)
            .map_err(|_| ParseError::InvalidValue(Self::CONSTRAINTS.to_string()))
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl TryFrom<String> for DeadlineTime {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DeadlineTime::new(&value)
    }
}

impl From<DeadlineTime> for String {
    fn from(value: DeadlineTime) -> Self {
        time::format_time(value.0)
    }
}

impl fmt::Display for DeadlineTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&time::format_time(self.0))
    }
}

/// Share of the module grade, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weightage(u8);

impl Weightage {
    pub const CONSTRAINTS: &'static str =
        "Weightage should be a whole number from 0 to 100, optionally followed by %";

    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, ParseError> {
        if value > Self::MAX {
            return Err(ParseError::InvalidValue(Self::CONSTRAINTS.to_string()));
        }
        Ok(Weightage(value))
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.trim();
        let digits = input.strip_suffix('%').unwrap_or(input);
        // u8 parsing also accepts a leading '+', reject it explicitly
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::InvalidValue(Self::CONSTRAINTS.to_string()));
        }
        let value: u8 = digits
            .parse()
            .map_err(|_| ParseError::InvalidValue(Self::CONSTRAINTS.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Weightage {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Weightage::new(value)
    }
}

impl From<Weightage> for u8 {
    fn from(value: Weightage) -> Self {
        value.0
    }
}

impl fmt::Display for Weightage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Free-form notes. Empty means no notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notes(String);

impl Notes {
    pub fn new(notes: &str) -> Self {
        Notes(notes.trim().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Notes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Unfinished,
    Finished,
}

impl Status {
    pub fn is_finished(&self) -> bool {
        matches!(self, Status::Finished)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Unfinished => f.write_str("Unfinished"),
            Status::Finished => f.write_str("Finished"),
        }
    }
}
