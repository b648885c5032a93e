//! Plain backtracking check.

use cspforge_core::{Csp, Value, VarId};
use tracing::trace;

use super::{Propagation, Propagator};

/// Checks the constraints the new assignment completed; never prunes.
///
/// Called without a variable it does nothing: before the first assignment
/// there is no fully assigned constraint to look at.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackCheck;

impl<V: Value> Propagator<V> for BacktrackCheck {
    fn propagate(&self, csp: &mut Csp<V>, newly_assigned: Option<VarId>) -> Propagation<V> {
        let Some(var) = newly_assigned else {
            return Propagation::consistent(Vec::new());
        };

        for &c in csp.constraints_with(var) {
            let constraint = csp.constraint(c);
            if let Some(values) = constraint.assigned_values(csp.variables()) {
                if !constraint.check(&values) {
                    trace!(
                        event = "violation",
                        propagator = "BT",
                        constraint = constraint.name(),
                    );
                    return Propagation::dead_end(Vec::new());
                }
            }
        }
        Propagation::consistent(Vec::new())
    }

    fn name(&self) -> &'static str {
        "BT"
    }
}
