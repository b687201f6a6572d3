use crate::config::CostTable;
use crate::error::Error;
use crate::position::Position;
use grid_2d::{Coord, Grid, Size};
use std::str::FromStr;

pub trait SolidGrid {
    fn size(&self) -> Size;
    fn is_solid(&self, coord: Coord) -> Option<bool>;
    fn is_solid_or_outside(&self, coord: Coord) -> bool {
        self.is_solid(coord).unwrap_or(true)
    }
    fn is_traversable(&self, position: Position) -> bool {
        !self.is_solid_or_outside(position.into())
    }
    fn is_empty(&self) -> bool {
        let size = self.size();
        size.width() == 0 || size.height() == 0
    }
}

pub trait CostGrid: SolidGrid {
    type Cost;
    /// The cost of stepping onto `coord`, or `None` if it can't be entered.
    fn cost(&self, coord: Coord) -> Option<Self::Cost>;
}

/// Rectangular grid of integer cell codes. `0` is blocked, anything else
/// can be walked on; `1`, `2` and `3` additionally carry weighted costs.
#[derive(Debug, Clone)]
pub struct CellGrid {
    cells: Grid<i32>,
}

impl CellGrid {
    /// Grids with no rows or no columns are accepted and are empty.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, Error> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        for (index, row) in rows.iter().enumerate() {
            let actual = row.as_ref().len();
            if actual != width {
                return Err(Error::RaggedRow {
                    row: index,
                    expected: width,
                    actual,
                });
            }
        }
        let size = if width == 0 {
            Size::new(0, 0)
        } else {
            Size::new(width as u32, rows.len() as u32)
        };
        let cells = Grid::new_fn(size, |coord| {
            rows[coord.y as usize].as_ref()[coord.x as usize]
        });
        Ok(Self { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.height() as usize
    }

    pub fn cols(&self) -> usize {
        self.cells.width() as usize
    }

    pub fn get(&self, position: Position) -> Option<i32> {
        self.cells.get(position.into()).cloned()
    }

    pub fn weighted(&self, cost_table: CostTable) -> WeightedGrid<'_> {
        WeightedGrid {
            cells: self,
            cost_table,
        }
    }
}

impl FromStr for CellGrid {
    type Err = Error;

    /// One row per non-blank line, cells separated by whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (row, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let cells = line
                .split_whitespace()
                .enumerate()
                .map(|(col, token)| {
                    token.parse::<i32>().map_err(|_| Error::InvalidCell {
                        row,
                        col,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }
        Self::from_rows(&rows)
    }
}

impl SolidGrid for CellGrid {
    fn size(&self) -> Size {
        self.cells.size()
    }
    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.cells.get(coord).map(|&cell| cell == 0)
    }
}

impl CostGrid for CellGrid {
    type Cost = u32;
    fn cost(&self, coord: Coord) -> Option<u32> {
        CostTable::default().cost_of(*self.cells.get(coord)?)
    }
}

/// A `CellGrid` read through a custom cost table.
#[derive(Debug, Clone, Copy)]
pub struct WeightedGrid<'a> {
    cells: &'a CellGrid,
    cost_table: CostTable,
}

impl<'a> SolidGrid for WeightedGrid<'a> {
    fn size(&self) -> Size {
        self.cells.size()
    }
    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.cells.is_solid(coord)
    }
}

impl<'a> CostGrid for WeightedGrid<'a> {
    type Cost = u32;
    fn cost(&self, coord: Coord) -> Option<u32> {
        self.cost_table.cost_of(*self.cells.cells.get(coord)?)
    }
}
