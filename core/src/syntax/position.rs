use core::fmt::Display;

use serde::{Deserialize, Serialize};

/// A 1-based byte offset into the source text. `0` means "no position".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub usize);

impl Position {
    pub const NONE: Position = Position(0);

    /// Position of the byte at `offset` (0-based) in the source.
    pub fn from_offset(offset: usize) -> Self {
        Position(offset + 1)
    }

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// The 0-based byte offset, if this position points into the source.
    pub fn offset(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl From<usize> for Position {
    fn from(value: usize) -> Self {
        Position(value)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
