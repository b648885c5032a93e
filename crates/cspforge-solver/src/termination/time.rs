//! Wall-clock limit on a search.

use std::time::Duration;

use super::Termination;
use crate::scope::SearchScope;

/// Stops the search once the time since `solve` began reaches the limit.
///
/// The check runs before each node, so a search stopped this way reports
/// [`SearchStatus::Terminated`](crate::SearchStatus::Terminated) and keeps
/// the solutions found so far. A scope that was never started has no
/// elapsed time and never trips the limit.
///
/// # Example
///
/// ```
/// use cspforge_config::PropagatorType;
/// use cspforge_models::{nary_ad_grid, WarehouseGrid};
/// use cspforge_solver::termination::TimeTermination;
/// use cspforge_solver::{BacktrackingSearch, FirstUnassigned, SearchStatus};
///
/// let grid = WarehouseGrid::from_rows(&[vec![3]]).unwrap();
/// let (mut csp, _) = nary_ad_grid(&grid).unwrap();
///
/// let search = BacktrackingSearch::new(
///     PropagatorType::Gac,
///     FirstUnassigned,
///     TimeTermination::seconds(30),
/// );
/// let outcome = search.solve(&mut csp).unwrap();
/// assert_eq!(outcome.status, SearchStatus::SolutionLimitReached);
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    /// Search time allowed before the next node is refused.
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.elapsed().is_some_and(|elapsed| elapsed >= self.limit)
    }
}
