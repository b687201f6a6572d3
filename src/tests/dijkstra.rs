use super::*;
use crate::config::CostTable;
use crate::dijkstra::*;
use crate::grid::CellGrid;
use crate::position::Position;
use grid_2d::Size;

fn common_test(strings: &[&str], length: usize, cost: u32) {
    let (grid, start, goal) = grid_from_strings(strings);
    let result = dijkstra(&grid, start, goal);

    assert_valid_path(&grid, result.path(), start, goal);
    assert_eq!(result.length(), length);
    assert_eq!(result.total_cost(), Some(cost));
    assert_eq!(weighted_path_cost(&grid, result.path()), cost);
    assert!(result.num_nodes_visited() >= result.path().len());
}

#[test]
fn uniform() {
    let strings = [
        "..........",
        "....#.....",
        "....#.....",
        "....#.....",
        ".s..#.....",
        "....#...g.",
        "....#.....",
        "..........",
        "..........",
        "..........",
    ];
    common_test(&strings, 12, 12);
}

#[test]
fn goes_around_heavy_cell() {
    let (grid, start, goal) = grid_from_strings(&["s~g", ".#.", "..."]);
    let result = dijkstra(&grid, start, goal);

    assert_eq!(result.total_cost(), Some(6));
    assert_eq!(
        result.path(),
        &positions(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)])[..]
    );
    // the heavy cell costs more than the whole detour so it is never settled
    assert!(!result.visited().contains(&Position::new(0, 1)));
    assert_eq!(result.num_nodes_visited(), 7);
}

#[test]
fn crosses_cheap_cells() {
    common_test(&["s,,g", "~~~.", "~~~."], 3, 11);
}

#[test]
fn mixed_costs() {
    let grid = CellGrid::from_rows(&[
        [1, 1, 2, 0, 1],
        [1, 0, 2, 1, 1],
        [1, 1, 3, 1, 0],
        [0, 1, 1, 1, 1],
        [1, 1, 0, 1, 1],
    ])
    .unwrap();
    let start = Position::new(0, 0);
    let goal = Position::new(4, 4);
    let result = dijkstra(&grid, start, goal);

    let reference = positions(&[
        (0, 0),
        (1, 0),
        (2, 0),
        (2, 1),
        (3, 1),
        (3, 2),
        (3, 3),
        (4, 3),
        (4, 4),
    ]);

    assert_valid_path(&grid, result.path(), start, goal);
    assert!(result.total_cost().unwrap() <= weighted_path_cost(&grid, &reference));
    assert_eq!(result.total_cost(), Some(8));
    assert_eq!(result.path(), &reference[..]);
    assert_eq!(result.num_nodes_visited(), 16);
    assert_eq!(
        result.visited(),
        &positions(&[
            (0, 0),
            (1, 0),
            (0, 1),
            (2, 0),
            (2, 1),
            (3, 1),
            (4, 1),
            (3, 2),
            (0, 2),
            (4, 0),
            (3, 3),
            (2, 3),
            (4, 3),
            (3, 4),
            (1, 3),
            (4, 4),
        ])[..]
    );
}

#[test]
fn equal_costs_settle_first_in_first_out() {
    let (grid, start, goal) = grid_from_strings(&["s.", ".g"]);
    let result = dijkstra(&grid, start, goal);

    assert_eq!(result.path(), &positions(&[(0, 0), (1, 0), (1, 1)])[..]);
    assert_eq!(
        result.visited(),
        &positions(&[(0, 0), (1, 0), (0, 1), (1, 1)])[..]
    );
    assert_eq!(result.total_cost(), Some(2));
}

#[test]
fn start_is_goal() {
    let (grid, start, goal) = grid_from_strings(&["...", ".B.", "..."]);
    let result = dijkstra(&grid, start, goal);

    assert_eq!(result.path(), &[start][..]);
    assert_eq!(result.num_nodes_visited(), 1);
    assert_eq!(result.total_cost(), Some(0));
}

#[test]
fn blocked_endpoints() {
    let (grid, start, goal) = grid_from_strings(&["S..", "..g"]);
    let result = dijkstra(&grid, start, goal);
    assert!(result.path().is_empty());
    assert_eq!(result.num_nodes_visited(), 0);
    assert_eq!(result.total_cost(), Some(0));

    let (grid, start, goal) = grid_from_strings(&["s..", "..G"]);
    let result = dijkstra(&grid, start, goal);
    assert!(result.path().is_empty());
    assert_eq!(result.num_nodes_visited(), 0);

    let result = dijkstra(&grid, start, Position::new(5, 5));
    assert!(result.path().is_empty());
    assert_eq!(result.num_nodes_visited(), 0);
}

#[test]
fn route_cut_by_wall() {
    let (grid, start, goal) = grid_from_strings(&["s,~#,g"]);
    let result = dijkstra(&grid, start, goal);

    assert!(result.path().is_empty());
    assert_eq!(result.total_cost(), Some(0));
    assert_eq!(
        result.visited(),
        &positions(&[(0, 0), (0, 1), (0, 2)])[..]
    );
}

#[test]
fn cost_is_zero_without_a_path() {
    let (grid, start, goal) = grid_from_strings(&["s#g"]);
    let result = dijkstra(&grid, start, goal);
    assert!(result.path().is_empty());
    assert_eq!(result.total_cost(), Some(0));

    let (grid, start, goal) = grid_from_strings(&["S.g"]);
    let result = dijkstra(&grid, start, goal);
    assert!(result.path().is_empty());
    assert_eq!(result.total_cost(), Some(0));

    let no_rows: [Vec<i32>; 0] = [];
    let empty = CellGrid::from_rows(&no_rows).unwrap();
    let origin = Position::new(0, 0);
    assert_eq!(dijkstra(&empty, origin, origin).total_cost(), Some(0));
}

#[test]
fn uncosted_cells_are_never_entered() {
    let (grid, start, goal) = grid_from_strings(&["s.x.g"]);
    let result = dijkstra(&grid, start, goal);
    assert!(result.path().is_empty());
    assert_eq!(result.visited(), &positions(&[(0, 0), (0, 1)])[..]);

    // an uncosted goal passes validation but can't be reached
    let result = dijkstra(&grid, start, Position::new(0, 2));
    assert!(result.path().is_empty());
    assert_eq!(result.num_nodes_visited(), 2);
}

#[test]
fn goal_walled_in() {
    let strings = [".....", "..#..", ".#g#.", "..#..", "s...."];
    let (grid, start, goal) = grid_from_strings(&strings);
    let result = dijkstra(&grid, start, goal);

    assert!(result.path().is_empty());
    assert_eq!(result.num_nodes_visited(), 20);
}

#[test]
fn custom_cost_table() {
    let (grid, start, goal) = grid_from_strings(&["s~g", ".#.", "..."]);
    let weighted = grid.weighted(CostTable::new(1, 1, 2));
    let result = dijkstra(&weighted, start, goal);

    assert_eq!(result.path(), &positions(&[(0, 0), (0, 1), (0, 2)])[..]);
    assert_eq!(result.total_cost(), Some(3));
}

#[test]
fn overflowing_route_is_unreachable() {
    let (grid, start, goal) = grid_from_strings(&["s~~g"]);
    let weighted = grid.weighted(CostTable::new(1, 1, u32::MAX));
    let result = dijkstra(&weighted, start, goal);

    assert!(result.path().is_empty());
    assert_eq!(result.num_nodes_visited(), 2);
}

#[test]
fn context_is_reusable() {
    let (grid, start, goal) = grid_from_strings(&["s,.", ".#.", "~.g"]);
    let mut ctx = DijkstraContext::new(Size::new(1, 1));

    let first = ctx.search(&grid, start, goal);
    let second = ctx.search(&grid, start, goal);

    assert_eq!(ctx.size(), grid_2d::Size::new(3, 3));
    assert_eq!(first.path(), second.path());
    assert_eq!(first.visited(), second.visited());
    assert_eq!(first.total_cost(), second.total_cost());
}
