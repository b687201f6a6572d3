#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Step costs of the three weighted cell codes. Entering a cell coded `1`
/// costs `light`, `2` costs `medium` and `3` costs `heavy`. Every other code
/// has no cost and can never be entered by the weighted search.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostTable {
    pub light: u32,
    pub medium: u32,
    pub heavy: u32,
}

impl CostTable {
    pub const fn new(light: u32, medium: u32, heavy: u32) -> Self {
        Self {
            light,
            medium,
            heavy,
        }
    }

    pub fn cost_of(&self, cell: i32) -> Option<u32> {
        match cell {
            1 => Some(self.light),
            2 => Some(self.medium),
            3 => Some(self.heavy),
            _ => None,
        }
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::new(1, 5, 10)
    }
}

/// How elapsed search time is reported in an `AlgorithmReport`.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingPolicy {
    /// 0 when nothing was visited, otherwise at least 1 millisecond.
    Normalized,
    /// Whole milliseconds as measured.
    Raw,
}

impl TimingPolicy {
    pub fn report_millis(self, elapsed: Duration, num_nodes_visited: usize) -> u64 {
        let millis = elapsed.as_millis() as u64;
        match self {
            TimingPolicy::Raw => millis,
            TimingPolicy::Normalized => {
                if num_nodes_visited == 0 {
                    0
                } else {
                    millis.max(1)
                }
            }
        }
    }
}

impl Default for TimingPolicy {
    fn default() -> Self {
        TimingPolicy::Normalized
    }
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub cost_table: CostTable,
    pub timing: TimingPolicy,
}
