//! Generalized arc consistency.

use std::collections::VecDeque;

use cspforge_core::{ConstraintId, Csp, Pruning, Value, VarId};
use tracing::{debug, trace};

use super::{Propagation, Propagator};

/// Enforces GAC with a FIFO constraint queue.
///
/// The queue starts with every constraint (no new assignment) or with the
/// constraints of the new variable. Whenever a value is pruned from `U`,
/// every constraint on `U` is queued again. Duplicates are allowed in the
/// queue; rechecking a constraint that has nothing left to prune is a no-op.
///
/// On success every unassigned variable's current domain is supported in
/// every constraint it appears in.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralizedArcConsistency;

impl<V: Value> Propagator<V> for GeneralizedArcConsistency {
    fn propagate(&self, csp: &mut Csp<V>, newly_assigned: Option<VarId>) -> Propagation<V> {
        let mut queue: VecDeque<ConstraintId> = match newly_assigned {
            Some(var) => csp.constraints_with(var).iter().copied().collect(),
            None => csp.all_constraints().collect(),
        };

        let mut prunings = Vec::new();
        let mut revisions = 0u64;
        while let Some(c) = queue.pop_front() {
            revisions += 1;
            let unassigned = csp.constraint(c).unassigned_variables(csp.variables());

            for var in unassigned {
                for value in csp.variable(var).cur_domain() {
                    if csp.has_support(c, var, value) {
                        continue;
                    }
                    csp.prune(var, value);
                    prunings.push(Pruning::new(var, value));
                    trace!(
                        event = "prune",
                        propagator = "GAC",
                        constraint = csp.constraint(c).name(),
                        variable = csp.variable(var).name(),
                        value = ?value,
                    );

                    if csp.variable(var).cur_domain_size() == 0 {
                        debug!(
                            event = "wipeout",
                            propagator = "GAC",
                            variable = csp.variable(var).name(),
                            prunings = prunings.len(),
                            revisions = revisions,
                        );
                        return Propagation::dead_end(prunings);
                    }
                    queue.extend(csp.constraints_with(var).iter().copied());
                }
            }
        }
        Propagation::consistent(prunings)
    }

    fn name(&self) -> &'static str {
        "GAC"
    }
}
