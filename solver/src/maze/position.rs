use std::fmt;
use std::ops::Add;

use super::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }

    /// Admissible and consistent on a 4-connected grid with unit moves.
    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn move_in_direction(
        self,
        direction: Direction,
        bounds: (usize, usize),
    ) -> Option<Self> {
        let (height, width) = bounds;
        let moved = (self + direction.offset())?;
        (moved.row < height && moved.col < width).then_some(moved)
    }

    /// True when `other` is exactly one orthogonal unit step away.
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Add<(isize, isize)> for Position {
    type Output = Option<Self>;

    fn add(self, (dr, dc): (isize, isize)) -> Self::Output {
        let new_row = self.row.checked_add_signed(dr)?;
        let new_col = self.col.checked_add_signed(dc)?;
        Some(Self::new(new_row, new_col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
