use std::fmt;

use crate::piece::Direction;

/// A board coordinate, 0-indexed from the top-left corner.
/// Row 0 is black's home side, the last row is white's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The square `steps` diagonal steps away along `dir`.
    /// Returns `None` when that would leave the non-negative quadrant; the
    /// upper bounds depend on the board and are checked there.
    pub fn offset(self, dir: Direction, steps: isize) -> Option<Self> {
        let row = self.row as isize + dir.0 * steps;
        let col = self.col as isize + dir.1 * steps;
        if row < 0 || col < 0 {
            return None;
        }
        Some(Self {
            row: row as usize,
            col: col as usize,
        })
    }

    /// Dark squares are the playable ones.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl From<(usize, usize)> for Square {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
