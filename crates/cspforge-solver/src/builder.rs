//! Builder module for constructing searches from configuration
//!
//! This module provides the wiring between configuration types and
//! the actual search implementation.

use cspforge_config::{PropagatorType, SearchConfig, VariableOrderingType};

use crate::search::BacktrackingSearch;
use crate::termination::{NodeCountTermination, OrTermination, TimeTermination};

/// Termination built from a [`SearchConfig`]: time limit OR node limit.
pub type ConfiguredTermination =
    OrTermination<(Option<TimeTermination>, Option<NodeCountTermination>)>;

/// Search built from a [`SearchConfig`].
pub type ConfiguredSearch =
    BacktrackingSearch<PropagatorType, VariableOrderingType, ConfiguredTermination>;

/// Builder for constructing searches from configuration.
pub struct SearchBuilder;

impl SearchBuilder {
    /// Builds a backtracking search from configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use cspforge_config::{PropagatorType, SearchConfig};
    /// use cspforge_solver::SearchBuilder;
    ///
    /// let config = SearchConfig::new()
    ///     .with_propagator(PropagatorType::Fc)
    ///     .with_solution_limit(4);
    /// let search = SearchBuilder::build(&config);
    /// assert_eq!(*search.propagator(), PropagatorType::Fc);
    /// assert_eq!(search.solution_limit(), Some(4));
    /// ```
    pub fn build(config: &SearchConfig) -> ConfiguredSearch {
        BacktrackingSearch::new(
            config.propagator,
            config.variable_ordering,
            Self::termination(config),
        )
        .with_solution_limit(config.solution_limit())
    }

    /// Builds the termination condition from configuration.
    pub fn termination(config: &SearchConfig) -> ConfiguredTermination {
        OrTermination((
            config.time_limit().map(TimeTermination::new),
            config.node_count_limit().map(NodeCountTermination::new),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::SearchScope;
    use crate::termination::Termination;

    #[test]
    fn test_unlimited_termination_never_fires() {
        let term = SearchBuilder::termination(&SearchConfig::default());
        let mut scope = SearchScope::new();
        scope.start_search();
        for depth in 1..=1000 {
            scope.stats_mut().record_node(depth);
        }
        assert!(!term.is_terminated(&scope));
    }

    #[test]
    fn test_node_limit_from_config() {
        let config = SearchConfig::new().with_node_count_limit(2);
        let term = SearchBuilder::termination(&config);
        let mut scope = SearchScope::new();
        scope.start_search();
        scope.stats_mut().record_node(1);
        assert!(!term.is_terminated(&scope));
        scope.stats_mut().record_node(2);
        assert!(term.is_terminated(&scope));
    }

    #[test]
    fn test_build_all_solutions() {
        let config = SearchConfig::new().with_all_solutions();
        let search = SearchBuilder::build(&config);
        assert_eq!(search.solution_limit(), None);
        assert_eq!(*search.propagator(), PropagatorType::Gac);
    }
}
