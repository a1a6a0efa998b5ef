//! Source positions.

use core::fmt;

use serde::Serialize;

/// A location in the scanned text.
///
/// Lines and columns are 1-based. Columns count characters, not bytes.
/// The derived ordering is lexicographic: line first, then column, which is
/// document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Self = Self { line: 1, column: 1 };

    /// Create a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The same line, `count` columns further right.
    #[must_use]
    pub const fn shifted(self, count: usize) -> Self {
        Self {
            line: self.line,
            column: self.column + count,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
