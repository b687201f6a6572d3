//! Path search over grids of integer cell codes.
//!
//! Two searches are provided: `bfs` finds a path with the fewest steps
//! through non-zero cells, and `dijkstra` finds the path with the lowest
//! total cost, where cells coded `1`, `2` and `3` cost 1, 5 and 10 to enter.
//! Both report the order in which cells were visited alongside the path.
//! `PathFinder` runs them side by side.

mod bfs;
mod compare;
mod config;
mod dijkstra;
mod error;
mod grid;
mod path;
mod position;
mod request;
mod result;

pub use crate::bfs::*;
pub use crate::compare::*;
pub use crate::config::*;
pub use crate::dijkstra::*;
pub use crate::error::*;
pub use crate::grid::*;
pub use crate::position::*;
pub use crate::request::*;
pub use crate::result::*;

#[cfg(test)]
mod tests;
