use crate::position::Position;
use direction::CardinalDirection;
use grid_2d::{Coord, Grid};

/// Neighbours are always expanded up, down, left, right. Ties between equally
/// good paths are resolved by this order.
pub(crate) const NEIGHBOUR_ORDER: [CardinalDirection; 4] = [
    CardinalDirection::North,
    CardinalDirection::South,
    CardinalDirection::West,
    CardinalDirection::East,
];

pub(crate) trait PathNode {
    fn from_parent(&self) -> Option<CardinalDirection>;
    fn coord(&self) -> Coord;
}

/// Walks parent directions back from `goal_index` until reaching a node
/// with no parent, then returns the positions in start-to-goal order.
pub(crate) fn make_path<N: PathNode>(node_grid: &Grid<N>, goal_index: usize) -> Vec<Position> {
    let mut path = Vec::new();
    let mut index = goal_index;
    loop {
        let node = node_grid.get_index_checked(index);
        path.push(node.coord().into());
        let direction = match node.from_parent() {
            Some(direction) => direction,
            None => break,
        };
        let parent_coord = node.coord() + direction.opposite().coord();
        index = match node_grid.index_of_coord(parent_coord) {
            Some(index) => index,
            None => break,
        };
    }
    path.reverse();
    path
}
