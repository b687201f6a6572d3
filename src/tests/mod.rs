use crate::grid::CellGrid;
use crate::position::Position;

mod dijkstra;

/// Builds a grid from a picture:
///
/// - `.` open cell (code 1)
/// - `,` code 2
/// - `~` code 3
/// - `x` code 7, walkable but has no weighted cost
/// - `#` wall (code 0)
/// - `s`/`g` open start/goal, `B` both, `S`/`G` start/goal on a wall
fn grid_from_strings(strings: &[&str]) -> (CellGrid, Position, Position) {
    let mut rows = Vec::new();
    let mut start = None;
    let mut goal = None;
    for (i, line) in strings.iter().enumerate() {
        let mut row = Vec::new();
        for (j, ch) in line.chars().enumerate() {
            let position = Position::new(i as i32, j as i32);
            let cell = match ch {
                '.' => 1,
                ',' => 2,
                '~' => 3,
                'x' => 7,
                '#' => 0,
                's' => {
                    start = Some(position);
                    1
                }
                'g' => {
                    goal = Some(position);
                    1
                }
                'B' => {
                    start = Some(position);
                    goal = Some(position);
                    1
                }
                'S' => {
                    start = Some(position);
                    0
                }
                'G' => {
                    goal = Some(position);
                    0
                }
                _ => panic!("unexpected character {:?}", ch),
            };
            row.push(cell);
        }
        rows.push(row);
    }
    let grid = CellGrid::from_rows(&rows).unwrap();
    (grid, start.unwrap(), goal.unwrap())
}

fn positions(pairs: &[(i32, i32)]) -> Vec<Position> {
    pairs.iter().cloned().map(Position::from).collect()
}

/// Asserts `path` is a walk from `start` to `goal` over non-zero cells.
fn assert_valid_path(grid: &CellGrid, path: &[Position], start: Position, goal: Position) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for position in path {
        match grid.get(*position) {
            Some(cell) => assert_ne!(cell, 0, "path goes through wall at {}", position),
            None => panic!("path leaves grid at {}", position),
        }
    }
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{} -> {}", pair[0], pair[1]);
    }
}

fn weighted_path_cost(grid: &CellGrid, path: &[Position]) -> u32 {
    path.iter()
        .skip(1)
        .map(|&position| match grid.get(position) {
            Some(1) => 1,
            Some(2) => 5,
            Some(3) => 10,
            other => panic!("uncosted cell {:?} at {}", other, position),
        })
        .sum()
}
