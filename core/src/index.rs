use std::fmt;

/// Position in a displayed list. Users count from one, code from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(index: usize) -> Self {
        Index(index)
    }

    /// Returns `None` for 0.
    pub fn from_one_based(index: usize) -> Option<Self> {
        index.checked_sub(1).map(Index)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
