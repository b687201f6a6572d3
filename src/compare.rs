use crate::bfs::bfs;
use crate::config::{SearchConfig, TimingPolicy};
use crate::dijkstra::dijkstra;
use crate::error::Error;
use crate::grid::CellGrid;
use crate::position::Position;
use crate::request::SearchRequest;
use crate::result::SearchResult;
use log::debug;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A search result flattened for presentation: path length is counted in
/// steps and elapsed time in whole milliseconds.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgorithmReport {
    pub path: Vec<Position>,
    pub visited: Vec<Position>,
    pub path_length: usize,
    pub nodes_visited: usize,
    pub execution_time_ms: u64,
    pub total_cost: Option<u32>,
}

impl AlgorithmReport {
    pub fn from_result(result: SearchResult, timing: TimingPolicy) -> Self {
        let path_length = result.length();
        let (path, visited, nodes_visited, total_cost, elapsed) = result.into_parts();
        Self {
            path,
            visited,
            path_length,
            nodes_visited,
            execution_time_ms: timing.report_millis(elapsed, nodes_visited),
            total_cost,
        }
    }
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    pub bfs_result: AlgorithmReport,
    pub dijkstra_result: AlgorithmReport,
}

/// Runs the breadth-first and weighted searches under one configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathFinder {
    config: SearchConfig,
}

impl PathFinder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn shortest_path(&self, grid: &CellGrid, start: Position, end: Position) -> Vec<Position> {
        bfs(grid, start, end).into_path()
    }

    pub fn lowest_cost_path(
        &self,
        grid: &CellGrid,
        start: Position,
        end: Position,
    ) -> Vec<Position> {
        self.run_dijkstra(grid, start, end).into_path()
    }

    pub fn shortest_path_with_stats(
        &self,
        grid: &CellGrid,
        start: Position,
        end: Position,
    ) -> AlgorithmReport {
        AlgorithmReport::from_result(bfs(grid, start, end), self.config.timing)
    }

    pub fn lowest_cost_path_with_stats(
        &self,
        grid: &CellGrid,
        start: Position,
        end: Position,
    ) -> AlgorithmReport {
        AlgorithmReport::from_result(self.run_dijkstra(grid, start, end), self.config.timing)
    }

    /// Both searches over the same input. Neither search sees the other's
    /// state.
    pub fn compare(&self, grid: &CellGrid, start: Position, end: Position) -> Comparison {
        let comparison = Comparison {
            bfs_result: self.shortest_path_with_stats(grid, start, end),
            dijkstra_result: self.lowest_cost_path_with_stats(grid, start, end),
        };
        debug!(
            "compare {} -> {}: bfs {} steps / {} visited, dijkstra {} steps / {} visited / cost {:?}",
            start,
            end,
            comparison.bfs_result.path_length,
            comparison.bfs_result.nodes_visited,
            comparison.dijkstra_result.path_length,
            comparison.dijkstra_result.nodes_visited,
            comparison.dijkstra_result.total_cost,
        );
        comparison
    }

    /// Compares both searches for a decoded request. A request missing its
    /// start or end compares as two empty reports, the weighted one costing
    /// 0; only a malformed grid is an error.
    pub fn compare_request(&self, request: &SearchRequest) -> Result<Comparison, Error> {
        let grid = CellGrid::from_rows(&request.grid)?;
        match (request.start(), request.end()) {
            (Some(start), Some(end)) => Ok(self.compare(&grid, start, end)),
            _ => {
                debug!("compare: request without start or end");
                Ok(Comparison {
                    bfs_result: AlgorithmReport::default(),
                    dijkstra_result: AlgorithmReport {
                        total_cost: Some(0),
                        ..Default::default()
                    },
                })
            }
        }
    }

    fn run_dijkstra(&self, grid: &CellGrid, start: Position, end: Position) -> SearchResult {
        dijkstra(&grid.weighted(self.config.cost_table), start, end)
    }
}
