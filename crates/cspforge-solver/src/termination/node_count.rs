//! Node count termination.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates once a number of assignments has been tried.
///
/// # Example
///
/// ```
/// use cspforge_solver::termination::NodeCountTermination;
///
/// // Terminate after 10_000 nodes
/// let term = NodeCountTermination::new(10_000);
/// ```
#[derive(Debug, Clone)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for NodeCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.node_count() >= self.limit
    }
}
