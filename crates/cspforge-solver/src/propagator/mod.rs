//! Constraint propagators.
//!
//! A propagator is called by the search after every assignment (and once
//! before the first one) and prunes current domains it can prove useless.
//! It reports whether the CSP is still consistent together with the exact
//! list of values it removed, in removal order; the caller restores that
//! list when it backtracks past the call.
//!
//! # Propagators
//!
//! - [`BacktrackCheck`]: only checks constraints that just became fully assigned
//! - [`ForwardChecking`]: prunes the last unassigned variable of each constraint
//! - [`GeneralizedArcConsistency`]: queue-based fixpoint removing every unsupported value

mod backtrack;
mod forward_checking;
mod gac;

use std::fmt::Debug;

use cspforge_config::PropagatorType;
use cspforge_core::{Csp, Pruning, Value, VarId};

pub use backtrack::BacktrackCheck;
pub use forward_checking::ForwardChecking;
pub use gac::GeneralizedArcConsistency;

/// Result of one propagator call.
///
/// A dead end still carries the prunings made before the wipeout was
/// detected, so the caller can undo exactly what the call changed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Propagation<V> {
    pub consistent: bool,
    pub prunings: Vec<Pruning<V>>,
}

impl<V: Value> Propagation<V> {
    /// The CSP is still consistent after removing `prunings`.
    pub fn consistent(prunings: Vec<Pruning<V>>) -> Self {
        Self {
            consistent: true,
            prunings,
        }
    }

    /// A constraint is violated or a domain was wiped out.
    pub fn dead_end(prunings: Vec<Pruning<V>>) -> Self {
        Self {
            consistent: false,
            prunings,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.consistent
    }
}

/// Prunes current domains after an assignment.
///
/// `newly_assigned` is the variable the search just assigned, or `None`
/// for the call made before any assignment exists.
pub trait Propagator<V: Value>: Send + Debug {
    fn propagate(&self, csp: &mut Csp<V>, newly_assigned: Option<VarId>) -> Propagation<V>;

    /// Short name used in log events.
    fn name(&self) -> &'static str;
}

impl<V: Value> Propagator<V> for PropagatorType {
    fn propagate(&self, csp: &mut Csp<V>, newly_assigned: Option<VarId>) -> Propagation<V> {
        match self {
            PropagatorType::Bt => BacktrackCheck.propagate(csp, newly_assigned),
            PropagatorType::Fc => ForwardChecking.propagate(csp, newly_assigned),
            PropagatorType::Gac => GeneralizedArcConsistency.propagate(csp, newly_assigned),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PropagatorType::Bt => "BT",
            PropagatorType::Fc => "FC",
            PropagatorType::Gac => "GAC",
        }
    }
}
