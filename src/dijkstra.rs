use crate::grid::CostGrid;
use crate::path::{self, PathNode, NEIGHBOUR_ORDER};
use crate::position::Position;
use crate::result::SearchResult;
use direction::CardinalDirection;
use grid_2d::{Coord, Grid, Size};
use log::{debug, trace};
use num_traits::{CheckedAdd, Zero};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
struct DijkstraNode<Cost> {
    seen: u64,
    visited: u64,
    coord: Coord,
    from_parent: Option<CardinalDirection>,
    cost: Cost,
}

impl<Cost: Zero> DijkstraNode<Cost> {
    fn new(coord: Coord) -> Self {
        Self {
            seen: 0,
            visited: 0,
            coord,
            from_parent: None,
            cost: Zero::zero(),
        }
    }
}

impl<Cost> PathNode for DijkstraNode<Cost> {
    fn from_parent(&self) -> Option<CardinalDirection> {
        self.from_parent
    }
    fn coord(&self) -> Coord {
        self.coord
    }
}

/// Entries with equal cost pop in the order they were pushed.
#[derive(Debug, Clone)]
struct PriorityEntry<Cost> {
    node_index: usize,
    cost: Cost,
    insertion: u64,
}

impl<Cost: Ord> PartialEq for PriorityEntry<Cost> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<Cost: Ord> Eq for PriorityEntry<Cost> {}

impl<Cost: Ord> PartialOrd for PriorityEntry<Cost> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Cost: Ord> Ord for PriorityEntry<Cost> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.insertion.cmp(&self.insertion))
    }
}

#[derive(Debug, Clone)]
pub struct DijkstraContext<Cost> {
    seq: u64,
    insertion: u64,
    priority_queue: BinaryHeap<PriorityEntry<Cost>>,
    node_grid: Grid<DijkstraNode<Cost>>,
}

impl<Cost> DijkstraContext<Cost>
where
    Cost: Copy + Ord + Zero + CheckedAdd + Debug,
{
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            insertion: 0,
            priority_queue: BinaryHeap::new(),
            node_grid: Grid::new_fn(size, DijkstraNode::new),
        }
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    fn fit(&mut self, size: Size) {
        if self.node_grid.size() != size {
            self.node_grid = Grid::new_fn(size, DijkstraNode::new);
        }
    }

    fn push(&mut self, node_index: usize, cost: Cost) {
        self.insertion += 1;
        self.priority_queue.push(PriorityEntry {
            node_index,
            cost,
            insertion: self.insertion,
        });
    }

    /// Lowest total cost path from `start` to `goal`, where each step costs
    /// whatever the grid charges for entering the destination cell. Start and
    /// goal only need to be non-solid; cells the grid has no cost for are
    /// never entered. The total cost is always present, and is zero when no
    /// path is found.
    pub fn search<G>(&mut self, grid: &G, start: Position, goal: Position) -> SearchResult<Cost>
    where
        G: CostGrid<Cost = Cost>,
    {
        let started = Instant::now();

        if grid.is_empty() {
            debug!("dijkstra: empty grid");
            return SearchResult::empty(Some(Zero::zero()), started.elapsed());
        }
        if !grid.is_traversable(start) || !grid.is_traversable(goal) {
            debug!(
                "dijkstra: start {} or goal {} is not traversable",
                start, goal
            );
            return SearchResult::empty(Some(Zero::zero()), started.elapsed());
        }
        if start == goal {
            return SearchResult::trivial(start, Some(Zero::zero()), started.elapsed());
        }

        self.fit(grid.size());
        self.seq += 1;
        self.insertion = 0;
        self.priority_queue.clear();

        let (start_index, goal_index) = match (
            self.node_grid.index_of_coord(start.into()),
            self.node_grid.index_of_coord(goal.into()),
        ) {
            (Some(start_index), Some(goal_index)) => (start_index, goal_index),
            _ => return SearchResult::empty(Some(Zero::zero()), started.elapsed()),
        };

        {
            let node = self.node_grid.get_index_checked_mut(start_index);
            node.seen = self.seq;
            node.from_parent = None;
            node.cost = Zero::zero();
        }
        self.push(start_index, Zero::zero());

        let mut visited: Vec<Position> = Vec::new();

        while let Some(current_entry) = self.priority_queue.pop() {
            let (current_coord, current_cost) = {
                let node = self.node_grid.get_index_checked_mut(current_entry.node_index);
                if current_entry.cost > node.cost {
                    continue;
                }
                if node.visited != self.seq {
                    node.visited = self.seq;
                    visited.push(node.coord.into());
                }
                (node.coord, node.cost)
            };

            if current_entry.node_index == goal_index {
                let path = path::make_path(&self.node_grid, goal_index);
                debug!(
                    "dijkstra: {} -> {} costs {:?} over {} steps, {} nodes visited",
                    start,
                    goal,
                    current_cost,
                    path.len() - 1,
                    visited.len()
                );
                return SearchResult::new(path, visited, Some(current_cost), started.elapsed());
            }

            trace!(
                "dijkstra: settled {} at {:?}",
                Position::from(current_coord),
                current_cost
            );

            for &direction in &NEIGHBOUR_ORDER {
                let neighbour_coord = current_coord + direction.coord();

                let step_cost = match grid.cost(neighbour_coord) {
                    Some(cost) => cost,
                    None => continue,
                };
                let cost = match current_cost.checked_add(&step_cost) {
                    Some(cost) => cost,
                    None => continue,
                };

                let index = match self.node_grid.index_of_coord(neighbour_coord) {
                    Some(index) => index,
                    None => continue,
                };

                let node = self.node_grid.get_index_checked_mut(index);
                if node.seen != self.seq || cost < node.cost {
                    node.seen = self.seq;
                    node.cost = cost;
                    node.from_parent = Some(direction);
                    self.push(index, cost);
                }
            }
        }

        debug!(
            "dijkstra: no path {} -> {}, {} nodes visited",
            start,
            goal,
            visited.len()
        );
        SearchResult::new(Vec::new(), visited, Some(Zero::zero()), started.elapsed())
    }
}

/// Lowest-cost search with a context allocated for this call only.
pub fn dijkstra<G>(grid: &G, start: Position, goal: Position) -> SearchResult<G::Cost>
where
    G: CostGrid,
    G::Cost: Copy + Ord + Zero + CheckedAdd + Debug,
{
    DijkstraContext::new(grid.size()).search(grid, start, goal)
}
