//! Search-level scope.

use std::time::{Duration, Instant};

use crate::stats::SearchStats;

/// Live state of one search run, read by termination conditions.
#[derive(Debug, Default)]
pub struct SearchScope {
    start_time: Option<Instant>,
    stats: SearchStats,
}

impl SearchScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_search(&mut self) {
        self.start_time = Some(Instant::now());
        self.stats = SearchStats::default();
    }

    /// Returns the time since [`start_search`](Self::start_search), if started.
    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    pub fn node_count(&self) -> u64 {
        self.stats.nodes
    }

    pub fn solution_count(&self) -> u64 {
        self.stats.solutions
    }

    /// Stops the clock and returns the final statistics.
    pub fn finish(mut self) -> SearchStats {
        self.stats.elapsed = self.elapsed().unwrap_or_default();
        self.stats
    }
}
