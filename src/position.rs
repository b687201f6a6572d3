use grid_2d::Coord;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell address in row-major terms. Components are signed so that
/// positions off the top or left edge of a grid can be asked about.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn is_adjacent(self, other: Self) -> bool {
        let rows = (i64::from(self.row) - i64::from(other.row)).abs();
        let cols = (i64::from(self.col) - i64::from(other.col)).abs();
        rows + cols == 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for Position {
    fn from(coord: Coord) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<Position> for Coord {
    fn from(position: Position) -> Self {
        Coord::new(position.col, position.row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
