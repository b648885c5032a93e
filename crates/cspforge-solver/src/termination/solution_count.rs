//! Solution count termination.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates once a number of solutions has been recorded.
///
/// Unlike the search's own solution limit, firing this condition ends the
/// run with [`SearchStatus::Terminated`](crate::search::SearchStatus::Terminated).
#[derive(Debug, Clone)]
pub struct SolutionCountTermination {
    limit: u64,
}

impl SolutionCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for SolutionCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.solution_count() >= self.limit
    }
}
