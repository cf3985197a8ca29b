//! Event ordering.

use std::fmt;

/// Sort direction for returned events, by event timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Oldest events first.
    Asc,
    /// Newest events first.
    #[default]
    Desc,
}

impl Direction {
    /// Returns the value sent in the `order` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
