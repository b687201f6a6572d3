use crate::grid::SolidGrid;
use crate::path::{self, PathNode, NEIGHBOUR_ORDER};
use crate::position::Position;
use crate::result::SearchResult;
use direction::CardinalDirection;
use grid_2d::{Coord, Grid, Size};
use log::{debug, trace};
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
struct BfsNode {
    seen: u64,
    coord: Coord,
    from_parent: Option<CardinalDirection>,
}

impl PathNode for BfsNode {
    fn from_parent(&self) -> Option<CardinalDirection> {
        self.from_parent
    }
    fn coord(&self) -> Coord {
        self.coord
    }
}

impl BfsNode {
    fn new(coord: Coord) -> Self {
        Self {
            seen: 0,
            coord,
            from_parent: None,
        }
    }
}

/// Reusable state for breadth-first searches. Each search bumps `seq`
/// instead of clearing the node grid.
#[derive(Debug, Clone)]
pub struct BfsContext {
    seq: u64,
    queue: VecDeque<usize>,
    node_grid: Grid<BfsNode>,
}

impl BfsContext {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            node_grid: Grid::new_fn(size, BfsNode::new),
            queue: VecDeque::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    fn fit(&mut self, size: Size) {
        if self.node_grid.size() != size {
            self.node_grid = Grid::new_fn(size, BfsNode::new);
        }
    }

    /// Shortest path by number of steps from `start` to `goal`, moving only
    /// through non-solid cells.
    pub fn search<G>(&mut self, grid: &G, start: Position, goal: Position) -> SearchResult
    where
        G: SolidGrid,
    {
        let started = Instant::now();

        if grid.is_empty() {
            debug!("bfs: empty grid");
            return SearchResult::empty(None, started.elapsed());
        }
        if !grid.is_traversable(start) || !grid.is_traversable(goal) {
            debug!("bfs: start {} or goal {} is not traversable", start, goal);
            return SearchResult::empty(None, started.elapsed());
        }
        if start == goal {
            return SearchResult::trivial(start, None, started.elapsed());
        }

        self.fit(grid.size());
        self.seq += 1;
        self.queue.clear();

        let (start_index, goal_index) = match (
            self.node_grid.index_of_coord(start.into()),
            self.node_grid.index_of_coord(goal.into()),
        ) {
            (Some(start_index), Some(goal_index)) => (start_index, goal_index),
            _ => return SearchResult::empty(None, started.elapsed()),
        };

        let mut visited = vec![start];
        {
            let node = self.node_grid.get_index_checked_mut(start_index);
            node.seen = self.seq;
            node.from_parent = None;
        }
        self.queue.push_back(start_index);

        while let Some(current_index) = self.queue.pop_front() {
            if current_index == goal_index {
                let path = path::make_path(&self.node_grid, goal_index);
                debug!(
                    "bfs: {} -> {} in {} steps, {} nodes visited",
                    start,
                    goal,
                    path.len() - 1,
                    visited.len()
                );
                return SearchResult::new(path, visited, None, started.elapsed());
            }

            let current_coord = self.node_grid.get_index_checked(current_index).coord;
            trace!("bfs: expanding {}", Position::from(current_coord));

            for &direction in &NEIGHBOUR_ORDER {
                let neighbour_coord = current_coord + direction.coord();

                if grid.is_solid_or_outside(neighbour_coord) {
                    continue;
                }

                let index = match self.node_grid.index_of_coord(neighbour_coord) {
                    Some(index) => index,
                    None => continue,
                };

                let node = self.node_grid.get_index_checked_mut(index);
                if node.seen != self.seq {
                    node.seen = self.seq;
                    node.from_parent = Some(direction);
                    visited.push(neighbour_coord.into());
                    self.queue.push_back(index);
                }
            }
        }

        debug!(
            "bfs: no path {} -> {}, {} nodes visited",
            start,
            goal,
            visited.len()
        );
        SearchResult::new(Vec::new(), visited, None, started.elapsed())
    }
}

/// Breadth-first search with a context allocated for this call only.
pub fn bfs<G: SolidGrid>(grid: &G, start: Position, goal: Position) -> SearchResult {
    BfsContext::new(grid.size()).search(grid, start, goal)
}
