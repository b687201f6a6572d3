use crate::position::Position;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The shape a search arrives in from outside: a raw cell matrix and the two
/// endpoints, either of which may be missing.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub grid: Vec<Vec<i32>>,
    #[cfg_attr(feature = "serialize", serde(default))]
    pub start_row: Option<i32>,
    #[cfg_attr(feature = "serialize", serde(default))]
    pub start_col: Option<i32>,
    #[cfg_attr(feature = "serialize", serde(default))]
    pub end_row: Option<i32>,
    #[cfg_attr(feature = "serialize", serde(default))]
    pub end_col: Option<i32>,
}

impl SearchRequest {
    pub fn new(grid: Vec<Vec<i32>>, start: Position, end: Position) -> Self {
        Self {
            grid,
            start_row: Some(start.row),
            start_col: Some(start.col),
            end_row: Some(end.row),
            end_col: Some(end.col),
        }
    }

    pub fn start(&self) -> Option<Position> {
        Some(Position::new(self.start_row?, self.start_col?))
    }

    pub fn end(&self) -> Option<Position> {
        Some(Position::new(self.end_row?, self.end_col?))
    }
}
