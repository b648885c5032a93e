//! Termination conditions for the backtracking search.

mod composite;
mod node_count;
mod solution_count;
mod time;

use std::fmt::Debug;

use crate::scope::SearchScope;

pub use composite::{AndTermination, OrTermination};
pub use node_count::NodeCountTermination;
pub use solution_count::SolutionCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Send + Debug {
    /// Returns true if searching should terminate.
    fn is_terminated(&self, scope: &SearchScope) -> bool;
}

/// An absent condition never terminates.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(scope))
    }
}
