//! Depth-first backtracking search.
//!
//! The search owns the assign/unassign and prune/restore discipline the
//! propagators rely on: every propagator call's prunings are restored, in
//! reverse order, before the variable it followed is unassigned. After a
//! run the CSP holds the first solution found (if any) with all current
//! domains restored.

use std::fmt;

use cspforge_core::{Csp, CspError, Value, VarId};
use thiserror::Error;
use tracing::{debug, info};

use crate::ordering::VariableSelector;
use crate::propagator::Propagator;
use crate::scope::SearchScope;
use crate::stats::SearchStats;
use crate::termination::Termination;

/// Errors raised while driving the search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The CSP rejected an assignment the search made
    #[error("Assignment failed: {0}")]
    Assignment(#[from] CspError),
}

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The whole search space was explored.
    Exhausted,
    /// The requested number of solutions was found.
    SolutionLimitReached,
    /// A termination condition fired first.
    Terminated,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStatus::Exhausted => write!(f, "Exhausted"),
            SearchStatus::SolutionLimitReached => write!(f, "SolutionLimitReached"),
            SearchStatus::Terminated => write!(f, "Terminated"),
        }
    }
}

/// A complete assignment, indexed by [`VarId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution<V> {
    values: Vec<V>,
}

impl<V: Value> Solution<V> {
    /// Captures the current assignment, or `None` if a variable is unassigned.
    pub fn capture(csp: &Csp<V>) -> Option<Self> {
        csp.variables()
            .iter()
            .map(|v| v.assigned_value())
            .collect::<Option<Vec<_>>>()
            .map(|values| Self { values })
    }

    pub fn value(&self, var: VarId) -> V {
        self.values[var.index()]
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Assigns every value of this solution to a freshly reset CSP.
    pub fn apply(&self, csp: &mut Csp<V>) -> Result<(), CspError> {
        csp.reset();
        for (var, value) in csp.variable_ids().zip(&self.values).collect::<Vec<_>>() {
            csp.assign(var, *value)?;
        }
        Ok(())
    }
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome<V> {
    pub solutions: Vec<Solution<V>>,
    pub status: SearchStatus,
    pub stats: SearchStats,
}

impl<V: Value> SearchOutcome<V> {
    pub fn first_solution(&self) -> Option<&Solution<V>> {
        self.solutions.first()
    }

    /// Returns true if the search proved the CSP has no solution.
    pub fn is_unsatisfiable(&self) -> bool {
        self.solutions.is_empty() && self.status == SearchStatus::Exhausted
    }
}

enum Flow {
    Continue,
    Stop(SearchStatus),
}

/// Backtracking search over a propagator, a variable selector and a
/// termination condition.
///
/// # Example
///
/// ```
/// use cspforge_core::{Constraint, Csp, Variable};
/// use cspforge_solver::{BacktrackingSearch, FirstUnassigned, ForwardChecking, NodeCountTermination};
///
/// let mut csp = Csp::new("pair");
/// let x = csp.add_variable(Variable::new("x", 1..=2).unwrap()).unwrap();
/// let y = csp.add_variable(Variable::new("y", 1..=2).unwrap()).unwrap();
/// let mut ne = Constraint::new("x!=y", [x, y]);
/// ne.add_satisfying_tuples(vec![vec![1, 2], vec![2, 1]]).unwrap();
/// csp.add_constraint(ne).unwrap();
///
/// let search = BacktrackingSearch::new(ForwardChecking, FirstUnassigned, NodeCountTermination::new(100))
///     .with_solution_limit(None);
/// let outcome = search.solve(&mut csp).unwrap();
/// assert_eq!(outcome.solutions.len(), 2);
/// assert_eq!(csp.variable(x).assigned_value(), Some(1));
/// ```
#[derive(Debug)]
pub struct BacktrackingSearch<P, S, T> {
    propagator: P,
    selector: S,
    termination: T,
    solution_limit: Option<usize>,
}

impl<P, S, T> BacktrackingSearch<P, S, T> {
    /// Creates a search that stops at the first solution.
    pub fn new(propagator: P, selector: S, termination: T) -> Self {
        Self {
            propagator,
            selector,
            termination,
            solution_limit: Some(1),
        }
    }

    /// Sets how many solutions to collect; `None` collects all of them.
    pub fn with_solution_limit(mut self, limit: Option<usize>) -> Self {
        self.solution_limit = limit;
        self
    }

    pub fn propagator(&self) -> &P {
        &self.propagator
    }

    pub fn solution_limit(&self) -> Option<usize> {
        self.solution_limit
    }
}

impl<P, S, T> BacktrackingSearch<P, S, T>
where
    T: Termination,
{
    /// Runs the search on `csp`.
    ///
    /// The CSP is reset first. When the run ends it is reset again and the
    /// first solution, if one was found, is assigned.
    pub fn solve<V>(&self, csp: &mut Csp<V>) -> Result<SearchOutcome<V>, SearchError>
    where
        V: Value,
        P: Propagator<V>,
        S: VariableSelector<V>,
    {
        let mut scope = SearchScope::new();
        scope.start_search();
        csp.reset();

        info!(
            event = "search_start",
            csp = csp.name(),
            propagator = self.propagator.name(),
            variable_count = csp.variable_count() as u64,
            constraint_count = csp.constraint_count() as u64,
        );

        let mut solutions = Vec::new();
        let root = self.propagator.propagate(csp, None);
        scope.stats_mut().record_prunings(root.prunings.len());

        let status = if root.is_consistent() {
            match self.search(csp, &mut scope, &mut solutions, 1) {
                Ok(Flow::Continue) => SearchStatus::Exhausted,
                Ok(Flow::Stop(status)) => status,
                Err(err) => {
                    csp.reset();
                    return Err(err);
                }
            }
        } else {
            debug!(event = "root_dead_end", prunings = root.prunings.len());
            scope.stats_mut().record_dead_end();
            SearchStatus::Exhausted
        };

        csp.reset();
        if let Some(first) = solutions.first() {
            first.apply(csp)?;
        }

        let stats = scope.finish();
        info!(
            event = "search_end",
            status = %status,
            solutions = stats.solutions,
            nodes = stats.nodes,
            prunings = stats.prunings,
            dead_ends = stats.dead_ends,
            duration_ms = stats.elapsed.as_millis() as u64,
            speed = stats.nodes_per_second() as u64,
        );

        Ok(SearchOutcome {
            solutions,
            status,
            stats,
        })
    }

    fn search<V>(
        &self,
        csp: &mut Csp<V>,
        scope: &mut SearchScope,
        solutions: &mut Vec<Solution<V>>,
        depth: usize,
    ) -> Result<Flow, SearchError>
    where
        V: Value,
        P: Propagator<V>,
        S: VariableSelector<V>,
    {
        let Some(var) = self.selector.select(csp) else {
            return Ok(self.record_leaf(csp, scope, solutions));
        };

        for value in csp.variable(var).cur_domain() {
            if self.termination.is_terminated(scope) {
                return Ok(Flow::Stop(SearchStatus::Terminated));
            }
            scope.stats_mut().record_node(depth);
            csp.assign(var, value)?;

            let propagation = self.propagator.propagate(csp, Some(var));
            scope.stats_mut().record_prunings(propagation.prunings.len());
            let flow = if propagation.is_consistent() {
                self.search(csp, scope, solutions, depth + 1)
            } else {
                scope.stats_mut().record_dead_end();
                Ok(Flow::Continue)
            };

            csp.restore(&propagation.prunings);
            csp.unassign(var);
            if let Flow::Stop(status) = flow? {
                return Ok(Flow::Stop(status));
            }
        }

        scope.stats_mut().record_backtrack();
        Ok(Flow::Continue)
    }

    fn record_leaf<V: Value>(
        &self,
        csp: &Csp<V>,
        scope: &mut SearchScope,
        solutions: &mut Vec<Solution<V>>,
    ) -> Flow {
        // Forward checking never looks at fully assigned constraints, so the
        // goal is checked here.
        let solution = match Solution::capture(csp) {
            Some(solution) if csp.is_solved() => solution,
            _ => {
                scope.stats_mut().record_dead_end();
                return Flow::Continue;
            }
        };

        solutions.push(solution);
        scope.stats_mut().record_solution();
        debug!(
            event = "solution",
            solution = scope.solution_count(),
            nodes = scope.node_count(),
        );

        match self.solution_limit {
            Some(limit) if solutions.len() >= limit => {
                Flow::Stop(SearchStatus::SolutionLimitReached)
            }
            _ => Flow::Continue,
        }
    }
}

#[cfg(test)]
mod tests;
