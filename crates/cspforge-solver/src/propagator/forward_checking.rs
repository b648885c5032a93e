//! Forward checking.

use cspforge_core::{ConstraintId, Csp, Pruning, Value, VarId};
use tracing::{debug, trace};

use super::{Propagation, Propagator};

/// Prunes the single unassigned variable of each nearly complete constraint.
///
/// With a new assignment only constraints containing that variable are
/// examined; without one every constraint is, which prunes unary
/// constraints before search starts. Constraints with zero or several
/// unassigned variables are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardChecking;

impl<V: Value> Propagator<V> for ForwardChecking {
    fn propagate(&self, csp: &mut Csp<V>, newly_assigned: Option<VarId>) -> Propagation<V> {
        let working: Vec<ConstraintId> = match newly_assigned {
            Some(var) => csp.constraints_with(var).to_vec(),
            None => csp.all_constraints().collect(),
        };

        let mut prunings = Vec::new();
        for c in working {
            let constraint = csp.constraint(c);
            if constraint.count_unassigned(csp.variables()) != 1 {
                continue;
            }
            let var = constraint.unassigned_variables(csp.variables())[0];

            for value in csp.variable(var).cur_domain() {
                if csp.has_support(c, var, value) {
                    continue;
                }
                csp.prune(var, value);
                prunings.push(Pruning::new(var, value));
                trace!(
                    event = "prune",
                    propagator = "FC",
                    variable = csp.variable(var).name(),
                    value = ?value,
                );

                if csp.variable(var).cur_domain_size() == 0 {
                    debug!(
                        event = "wipeout",
                        propagator = "FC",
                        variable = csp.variable(var).name(),
                        prunings = prunings.len(),
                    );
                    return Propagation::dead_end(prunings);
                }
            }
        }
        Propagation::consistent(prunings)
    }

    fn name(&self) -> &'static str {
        "FC"
    }
}
