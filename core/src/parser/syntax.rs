use std::fmt;

/// A literal marker such as `n/` that introduces an argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Prefix(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_MODULE_CODE: Prefix = Prefix::new("mc/");
pub const PREFIX_WEIGHTAGE: Prefix = Prefix::new("w/");
pub const PREFIX_DEADLINE_DATE: Prefix = Prefix::new("d/");
pub const PREFIX_DEADLINE_TIME: Prefix = Prefix::new("t/");
pub const PREFIX_NOTES: Prefix = Prefix::new("r/");
pub const PREFIX_TAG: Prefix = Prefix::new("pt/");
pub const PREFIX_PRIORITY_TAG: Prefix = Prefix::new("ptag/");
pub const PREFIX_START_DATE: Prefix = Prefix::new("start/");
pub const PREFIX_END_DATE: Prefix = Prefix::new("end/");
pub const PREFIX_DAY: Prefix = Prefix::new("day/");
pub const PREFIX_WEEK: Prefix = Prefix::new("week/");
