use crate::position::Position;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of a single search. The path is empty when there is no route or
/// the input was rejected; the visitation diagnostics are kept either way.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<Cost = u32> {
    path: Vec<Position>,
    visited: Vec<Position>,
    num_nodes_visited: usize,
    total_cost: Option<Cost>,
    elapsed: Duration,
}

impl<Cost> SearchResult<Cost> {
    pub(crate) fn new(
        path: Vec<Position>,
        visited: Vec<Position>,
        total_cost: Option<Cost>,
        elapsed: Duration,
    ) -> Self {
        Self {
            num_nodes_visited: visited.len(),
            path,
            visited,
            total_cost,
            elapsed,
        }
    }

    pub(crate) fn empty(total_cost: Option<Cost>, elapsed: Duration) -> Self {
        Self::new(Vec::new(), Vec::new(), total_cost, elapsed)
    }

    pub(crate) fn trivial(position: Position, total_cost: Option<Cost>, elapsed: Duration) -> Self {
        Self::new(vec![position], vec![position], total_cost, elapsed)
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Position> {
        self.path
    }

    /// Positions in the order they were discovered (breadth-first) or
    /// settled (weighted).
    pub fn visited(&self) -> &[Position] {
        &self.visited
    }

    pub fn num_nodes_visited(&self) -> usize {
        self.num_nodes_visited
    }

    pub fn total_cost(&self) -> Option<Cost>
    where
        Cost: Copy,
    {
        self.total_cost
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of steps along the path.
    pub fn length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub(crate) fn into_parts(
        self,
    ) -> (Vec<Position>, Vec<Position>, usize, Option<Cost>, Duration) {
        (
            self.path,
            self.visited,
            self.num_nodes_visited,
            self.total_cost,
            self.elapsed,
        )
    }
}
