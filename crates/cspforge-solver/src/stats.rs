//! Search statistics.
//!
//! Plain counters updated by the backtracking search.

use std::time::Duration;

/// Counters for one search run.
///
/// # Example
///
/// ```
/// use cspforge_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.record_node(1);
/// stats.record_node(2);
/// stats.record_prunings(3);
/// stats.record_dead_end();
///
/// assert_eq!(stats.nodes, 2);
/// assert_eq!(stats.max_depth, 2);
/// assert_eq!(stats.prunings, 3);
/// assert_eq!(stats.dead_ends, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Assignments tried.
    pub nodes: u64,
    /// Values removed by propagation, including the root call.
    pub prunings: u64,
    /// Propagator calls that reported a violation or wipeout.
    pub dead_ends: u64,
    /// Variables whose values were all tried without success.
    pub backtracks: u64,
    /// Complete assignments found.
    pub solutions: u64,
    /// Deepest assignment level reached.
    pub max_depth: usize,
    /// Wall time of the run, set when the search ends.
    pub elapsed: Duration,
}

impl SearchStats {
    /// Records an assignment made at `depth` (1 for the first variable).
    pub fn record_node(&mut self, depth: usize) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn record_prunings(&mut self, count: usize) {
        self.prunings += count as u64;
    }

    pub fn record_dead_end(&mut self) {
        self.dead_ends += 1;
    }

    pub fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    pub fn record_solution(&mut self) {
        self.solutions += 1;
    }

    /// Returns the nodes per second rate.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.nodes as f64 / secs
        } else {
            0.0
        }
    }
}
