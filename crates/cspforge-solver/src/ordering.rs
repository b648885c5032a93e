//! Variable ordering heuristics.
//!
//! A selector picks the next unassigned variable for the search to branch
//! on, or returns `None` once every variable is assigned. Ties are broken
//! by insertion order, so every selector is deterministic.

use std::cmp::Reverse;
use std::fmt::Debug;

use cspforge_config::VariableOrderingType;
use cspforge_core::{Csp, Value, VarId};

/// Chooses the next variable to assign.
pub trait VariableSelector<V: Value>: Send + Debug {
    fn select(&self, csp: &Csp<V>) -> Option<VarId>;
}

/// First unassigned variable in insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstUnassigned;

impl<V: Value> VariableSelector<V> for FirstUnassigned {
    fn select(&self, csp: &Csp<V>) -> Option<VarId> {
        csp.variable_ids()
            .find(|&id| !csp.variable(id).is_assigned())
    }
}

/// Unassigned variable with the smallest current domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumRemainingValues;

impl<V: Value> VariableSelector<V> for MinimumRemainingValues {
    fn select(&self, csp: &Csp<V>) -> Option<VarId> {
        csp.variable_ids()
            .filter(|&id| !csp.variable(id).is_assigned())
            .min_by_key(|&id| csp.variable(id).cur_domain_size())
    }
}

/// Unassigned variable involved in the most constraints that still have
/// another unassigned variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeHeuristic;

impl DegreeHeuristic {
    fn degree<V: Value>(csp: &Csp<V>, var: VarId) -> usize {
        csp.constraints_with(var)
            .iter()
            .filter(|&&c| csp.constraint(c).count_unassigned(csp.variables()) > 1)
            .count()
    }
}

impl<V: Value> VariableSelector<V> for DegreeHeuristic {
    fn select(&self, csp: &Csp<V>) -> Option<VarId> {
        csp.variable_ids()
            .filter(|&id| !csp.variable(id).is_assigned())
            .min_by_key(|&id| Reverse(Self::degree(csp, id)))
    }
}

impl<V: Value> VariableSelector<V> for VariableOrderingType {
    fn select(&self, csp: &Csp<V>) -> Option<VarId> {
        match self {
            VariableOrderingType::FirstUnassigned => FirstUnassigned.select(csp),
            VariableOrderingType::MinimumRemainingValues => MinimumRemainingValues.select(csp),
            VariableOrderingType::Degree => DegreeHeuristic.select(csp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cspforge_test::csp::{chain_csp, triangle_csp};

    #[test]
    fn test_first_unassigned() {
        let mut csp = triangle_csp(&[1, 2, 3]);
        let first = csp.variable_ids().next().unwrap();
        assert_eq!(FirstUnassigned.select(&csp), Some(first));

        csp.assign(first, 1).unwrap();
        assert_eq!(
            FirstUnassigned.select(&csp),
            csp.variable_ids().nth(1)
        );
    }

    #[test]
    fn test_none_when_all_assigned() {
        let mut csp = triangle_csp(&[1, 2, 3]);
        for (id, value) in csp.variable_ids().zip([1, 2, 3]).collect::<Vec<_>>() {
            csp.assign(id, value).unwrap();
        }
        assert_eq!(FirstUnassigned.select(&csp), None);
        assert_eq!(MinimumRemainingValues.select(&csp), None);
        assert_eq!(DegreeHeuristic.select(&csp), None);
    }

    #[test]
    fn test_minimum_remaining_values_prefers_smallest_domain() {
        let mut csp = triangle_csp(&[1, 2, 3]);
        let third = csp.variable_ids().nth(2).unwrap();
        csp.prune(third, 1);
        assert_eq!(MinimumRemainingValues.select(&csp), Some(third));
    }

    #[test]
    fn test_minimum_remaining_values_breaks_ties_by_insertion_order() {
        let csp = triangle_csp(&[1, 2, 3]);
        assert_eq!(
            MinimumRemainingValues.select(&csp),
            csp.variable_ids().next()
        );
    }

    #[test]
    fn test_degree_prefers_most_constrained() {
        // x0 < x1 < x2: x1 sits in both constraints
        let csp = chain_csp(3, &[1, 2, 3]);
        let y = csp.variable_by_name("x1").unwrap();
        assert_eq!(DegreeHeuristic.select(&csp), Some(y));
    }

    #[test]
    fn test_ordering_type_dispatch() {
        let csp = chain_csp(3, &[1, 2, 3]);
        assert_eq!(
            VariableOrderingType::Degree.select(&csp),
            csp.variable_by_name("x1")
        );
        assert_eq!(
            VariableOrderingType::FirstUnassigned.select(&csp),
            csp.variable_by_name("x0")
        );
    }
}
