//! Tests for the backtracking search.

use std::collections::HashSet;

use cspforge_config::{PropagatorType, SearchConfig, VariableOrderingType};
use cspforge_core::{Csp, VarId};
use cspforge_models::{
    binary_ne_grid, full_model, nary_ad_grid, GridModel, ModelError, WarehouseGrid,
};
use cspforge_test::csp::triangle_csp;
use cspforge_test::warehouse::{
    contradictory_2x2_rows, empty_grid_rows, unique_3x3_rows, unique_3x3_solution,
};

use super::*;
use crate::builder::SearchBuilder;
use crate::ordering::FirstUnassigned;
use crate::termination::{NodeCountTermination, SolutionCountTermination, TimeTermination};

type ModelBuilder = fn(&WarehouseGrid) -> Result<GridModel, ModelError>;

const PROPAGATORS: [PropagatorType; 3] =
    [PropagatorType::Bt, PropagatorType::Fc, PropagatorType::Gac];

fn find_all<P>(
    propagator: P,
) -> BacktrackingSearch<P, FirstUnassigned, Option<NodeCountTermination>> {
    BacktrackingSearch::new(propagator, FirstUnassigned, None).with_solution_limit(None)
}

fn solution_set(outcome: &SearchOutcome<i32>) -> HashSet<Vec<i32>> {
    outcome
        .solutions
        .iter()
        .map(|s| s.values().to_vec())
        .collect()
}

fn grid_values(solution: &Solution<i32>, vars: &[Vec<VarId>]) -> Vec<Vec<i32>> {
    vars.iter()
        .map(|line| line.iter().map(|&id| solution.value(id)).collect())
        .collect()
}

fn model(build: ModelBuilder, rows: &[Vec<i64>]) -> GridModel {
    let grid = WarehouseGrid::from_rows(rows).unwrap();
    build(&grid).unwrap()
}

fn assert_is_latin_square(grid: &[Vec<i32>]) {
    let n = grid.len();
    for i in 0..n {
        let row: HashSet<i32> = grid[i].iter().copied().collect();
        let col: HashSet<i32> = grid.iter().map(|line| line[i]).collect();
        assert_eq!(row.len(), n);
        assert_eq!(col.len(), n);
    }
}

#[test]
fn test_triangle_all_solutions() {
    for propagator in PROPAGATORS {
        let mut csp = triangle_csp(&[1, 2, 3]);
        let outcome = find_all(propagator).solve(&mut csp).unwrap();
        assert_eq!(outcome.solutions.len(), 6);
        assert_eq!(outcome.status, SearchStatus::Exhausted);
        assert_eq!(outcome.stats.solutions, 6);
        assert!(!outcome.is_unsatisfiable());
    }
}

#[test]
fn test_empty_grid_has_twelve_solutions_in_every_combination() {
    let mut reference: Option<HashSet<Vec<i32>>> = None;
    let builders: [ModelBuilder; 2] = [binary_ne_grid, nary_ad_grid];
    for build in builders {
        for propagator in PROPAGATORS {
            let (mut csp, vars) = model(build, &empty_grid_rows(3));
            let outcome = find_all(propagator).solve(&mut csp).unwrap();
            assert_eq!(outcome.solutions.len(), 12);

            for solution in &outcome.solutions {
                assert_is_latin_square(&grid_values(solution, &vars));
            }
            let set = solution_set(&outcome);
            assert_eq!(set.len(), 12);
            match &reference {
                Some(expected) => assert_eq!(&set, expected),
                None => reference = Some(set),
            }
        }
    }
}

#[test]
fn test_unique_instance_has_one_solution() {
    for propagator in PROPAGATORS {
        let (mut csp, vars) = model(full_model, &unique_3x3_rows());
        let outcome = find_all(propagator).solve(&mut csp).unwrap();
        assert_eq!(outcome.solutions.len(), 1);
        assert_eq!(
            grid_values(&outcome.solutions[0], &vars),
            unique_3x3_solution()
        );
    }
}

#[test]
fn test_gac_solves_unique_instance_without_backtracking() {
    let (mut csp, _) = model(full_model, &unique_3x3_rows());
    let outcome = find_all(PropagatorType::Gac).solve(&mut csp).unwrap();
    assert_eq!(outcome.stats.nodes, 9);
    assert_eq!(outcome.stats.dead_ends, 0);
}

#[test]
fn test_csp_holds_first_solution_after_search() {
    let (mut csp, vars) = model(full_model, &unique_3x3_rows());
    let outcome = find_all(PropagatorType::Fc).solve(&mut csp).unwrap();

    let first = outcome.first_solution().unwrap();
    for (id, value) in csp.variable_ids().zip(first.values()) {
        assert_eq!(csp.variable(id).assigned_value(), Some(*value));
    }
    assert!(csp.is_solved());
    assert_eq!(csp.variable(vars[0][0]).assigned_value(), Some(1));
}

#[test]
fn test_contradictory_instance_is_unsatisfiable() {
    for propagator in PROPAGATORS {
        let (mut csp, _) = model(full_model, &contradictory_2x2_rows());
        let outcome = find_all(propagator).solve(&mut csp).unwrap();
        assert!(outcome.is_unsatisfiable(), "{propagator:?}");
        assert!(outcome.first_solution().is_none());

        // nothing is left assigned or pruned
        for v in csp.variables() {
            assert!(!v.is_assigned());
            assert_eq!(v.cur_domain_size(), v.domain_size());
        }
    }
}

#[test]
fn test_gac_refutes_contradictory_instance_at_root() {
    let (mut csp, _) = model(full_model, &contradictory_2x2_rows());
    let outcome = find_all(PropagatorType::Gac).solve(&mut csp).unwrap();
    assert_eq!(outcome.stats.nodes, 0);
    assert_eq!(outcome.stats.dead_ends, 1);
}

#[test]
fn test_solution_limit() {
    let mut csp = triangle_csp(&[1, 2, 3]);
    let search = BacktrackingSearch::new(
        PropagatorType::Fc,
        FirstUnassigned,
        None::<NodeCountTermination>,
    )
    .with_solution_limit(Some(2));
    let outcome = search.solve(&mut csp).unwrap();
    assert_eq!(outcome.solutions.len(), 2);
    assert_eq!(outcome.status, SearchStatus::SolutionLimitReached);
}

#[test]
fn test_default_limit_stops_at_first_solution() {
    let mut csp = triangle_csp(&[1, 2, 3]);
    let search = BacktrackingSearch::new(
        PropagatorType::Gac,
        FirstUnassigned,
        None::<NodeCountTermination>,
    );
    let outcome = search.solve(&mut csp).unwrap();
    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.solutions[0].values(), &[1, 2, 3]);
    assert_eq!(outcome.status, SearchStatus::SolutionLimitReached);
}

#[test]
fn test_node_limit_terminates_search() {
    let mut csp = triangle_csp(&[1, 2, 3]);
    let search = BacktrackingSearch::new(
        PropagatorType::Bt,
        FirstUnassigned,
        NodeCountTermination::new(1),
    )
    .with_solution_limit(None);
    let outcome = search.solve(&mut csp).unwrap();
    assert_eq!(outcome.status, SearchStatus::Terminated);
    assert!(outcome.solutions.is_empty());
    assert!(!outcome.is_unsatisfiable());
    assert_eq!(outcome.stats.nodes, 1);
    assert!(csp.assignment().iter().all(Option::is_none));
}

#[test]
fn test_expired_time_limit_stops_before_first_node() {
    let (mut csp, _) = model(nary_ad_grid, &empty_grid_rows(3));
    let search = BacktrackingSearch::new(
        PropagatorType::Gac,
        FirstUnassigned,
        TimeTermination::millis(0),
    );
    let outcome = search.solve(&mut csp).unwrap();
    assert_eq!(outcome.status, SearchStatus::Terminated);
    assert_eq!(outcome.stats.nodes, 0);
    assert!(outcome.solutions.is_empty());
    assert!(!outcome.is_unsatisfiable());
}

#[test]
fn test_solution_count_termination_reports_terminated() {
    let mut csp = triangle_csp(&[1, 2, 3]);
    let search = BacktrackingSearch::new(
        PropagatorType::Fc,
        FirstUnassigned,
        SolutionCountTermination::new(1),
    )
    .with_solution_limit(None);
    let outcome = search.solve(&mut csp).unwrap();
    assert_eq!(outcome.status, SearchStatus::Terminated);
    assert_eq!(outcome.solutions.len(), 1);
    assert!(csp.is_solved());
}

#[test]
fn test_orderings_agree_on_solutions() {
    let mut reference: Option<HashSet<Vec<i32>>> = None;
    for ordering in [
        VariableOrderingType::FirstUnassigned,
        VariableOrderingType::MinimumRemainingValues,
        VariableOrderingType::Degree,
    ] {
        let (mut csp, _) = model(nary_ad_grid, &empty_grid_rows(3));
        let search =
            BacktrackingSearch::new(PropagatorType::Gac, ordering, None::<NodeCountTermination>)
                .with_solution_limit(None);
        let set = solution_set(&search.solve(&mut csp).unwrap());
        match &reference {
            Some(expected) => assert_eq!(&set, expected, "{ordering:?}"),
            None => reference = Some(set),
        }
    }
}

#[test]
fn test_search_from_config() {
    let config = SearchConfig::new()
        .with_propagator(PropagatorType::Fc)
        .with_variable_ordering(VariableOrderingType::Degree)
        .with_all_solutions();
    let mut csp = triangle_csp(&[1, 2, 3]);
    let outcome = SearchBuilder::build(&config).solve(&mut csp).unwrap();
    assert_eq!(outcome.solutions.len(), 6);
    assert_eq!(outcome.status, SearchStatus::Exhausted);
}

#[test]
fn test_solution_apply_resets_first() {
    let mut csp: Csp<i32> = triangle_csp(&[1, 2, 3]);
    let x = csp.variable_by_name("x").unwrap();
    csp.assign(x, 3).unwrap();

    let outcome = find_all(PropagatorType::Gac).solve(&mut csp).unwrap();
    let last = outcome.solutions.last().unwrap();
    last.apply(&mut csp).unwrap();
    assert_eq!(
        csp.assignment(),
        last.values().iter().copied().map(Some).collect::<Vec<_>>()
    );
}
