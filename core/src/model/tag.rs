use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::model::fields::string_conversions;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub const CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn new(name: &str) -> Result<Self, ParseError> {
        let name = name.trim();
        if name.is_empty() || !name.chars().all(char::is_alphanumeric) {
            return Err(ParseError::InvalidValue(Self::CONSTRAINTS.to_string()));
        }
        Ok(Tag(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_conversions!(Tag);

/// How urgent the user considers a task. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityTag {
    #[default]
    Low,
    Medium,
    High,
}

impl PriorityTag {
    pub const CONSTRAINTS: &'static str = "Priority tags should be one of LOW, MEDIUM or HIGH";

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match input.trim().to_lowercase().as_str() {
            "l" | "low" => Ok(PriorityTag::Low),
            "m" | "med" | "medium" => Ok(PriorityTag::Medium),
            "h" | "high" => Ok(PriorityTag::High),
            _ => Err(ParseError::InvalidValue(Self::CONSTRAINTS.to_string())),
        }
    }
}

impl fmt::Display for PriorityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityTag::Low => f.write_str("LOW"),
            PriorityTag::Medium => f.write_str("MEDIUM"),
            PriorityTag::High => f.write_str("HIGH"),
        }
    }
}
