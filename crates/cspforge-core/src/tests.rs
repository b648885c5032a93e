//! Tests for the domain model and the CSP container.

use std::sync::Arc;

use super::*;

fn var(name: &str, domain: &[i32]) -> Variable<i32> {
    Variable::new(name, domain.iter().copied()).unwrap()
}

fn not_equal(csp: &mut Csp<i32>, name: &str, a: VarId, b: VarId) -> ConstraintId {
    let mut tuples = Vec::new();
    for x in csp.variable(a).domain() {
        for y in csp.variable(b).domain() {
            if x != y {
                tuples.push(vec![*x, *y]);
            }
        }
    }
    let mut c = Constraint::new(name, [a, b]);
    c.add_satisfying_tuples(tuples).unwrap();
    csp.add_constraint(c).unwrap()
}

#[test]
fn test_variable_rejects_empty_domain() {
    let err = Variable::<i32>::new("x", Vec::new()).unwrap_err();
    assert_eq!(err, CspError::EmptyDomain("x".to_string()));
}

#[test]
fn test_variable_rejects_duplicate_values() {
    let err = Variable::new("x", vec![1, 2, 1]).unwrap_err();
    assert!(matches!(err, CspError::DuplicateDomainValue { .. }));
}

#[test]
fn test_prune_and_unprune_are_symmetric() {
    let mut x = var("x", &[1, 2, 3, 4]);
    assert!(x.prune_value(3));
    assert!(x.prune_value(1));
    assert_eq!(x.cur_domain(), vec![2, 4]);
    assert_eq!(x.cur_domain_size(), 2);

    assert!(x.unprune_value(1));
    assert!(x.unprune_value(3));
    assert_eq!(x.cur_domain(), x.domain().to_vec());
}

#[test]
fn test_assigned_variable_reports_singleton_domain() {
    let mut x = var("x", &[1, 2, 3]);
    x.assign(2).unwrap();
    assert_eq!(x.cur_domain(), vec![2]);
    assert_eq!(x.cur_domain_size(), 1);
    assert!(x.in_cur_domain(2));
    assert!(!x.in_cur_domain(1));

    x.unassign();
    assert_eq!(x.cur_domain(), vec![1, 2, 3]);
}

#[test]
fn test_assign_rejects_pruned_value() {
    let mut x = var("x", &[1, 2]);
    x.prune_value(1);
    assert!(matches!(
        x.assign(1),
        Err(CspError::ValueNotInDomain { .. })
    ));
    x.assign(2).unwrap();
    assert_eq!(x.assign(2), Err(CspError::AlreadyAssigned("x".to_string())));
}

#[test]
fn test_table_deduplicates_and_checks_arity() {
    let table = TupleTable::from_tuples(2, vec![vec![1, 2], vec![1, 2], vec![2, 1]]).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.supports_of(0, 1).count(), 1);
    assert_eq!(table.supports_of(1, 3).count(), 0);

    let err = TupleTable::from_tuples(2, vec![vec![1, 2, 3]]).unwrap_err();
    assert!(matches!(
        err,
        CspError::ArityMismatch {
            expected: 2,
            found: 3,
            ..
        }
    ));
}

#[test]
fn test_constraint_table_attached_once() {
    let table = Arc::new(TupleTable::from_tuples(2, vec![vec![1, 2]]).unwrap());
    let mut c = Constraint::new("c", [VarId(0), VarId(1)]);
    c.set_table(Arc::clone(&table)).unwrap();
    assert_eq!(
        c.set_table(table),
        Err(CspError::TableAlreadyAttached("c".to_string()))
    );
}

#[test]
fn test_constraint_table_arity_must_match_scope() {
    let table = Arc::new(TupleTable::from_tuples(3, vec![vec![1, 2, 3]]).unwrap());
    let mut c = Constraint::new("c", [VarId(0), VarId(1)]);
    assert!(matches!(
        c.set_table(table),
        Err(CspError::ArityMismatch { .. })
    ));
}

#[test]
fn test_add_constraint_requires_table() {
    let mut csp = Csp::new("t");
    let x = csp.add_variable(var("x", &[1])).unwrap();
    let err = csp.add_constraint(Constraint::new("bare", [x])).unwrap_err();
    assert_eq!(err, CspError::MissingTable("bare".to_string()));
}

#[test]
fn test_add_constraint_rejects_unknown_and_repeated_variables() {
    let mut csp = Csp::new("t");
    let x = csp.add_variable(var("x", &[1, 2])).unwrap();

    let mut unknown = Constraint::new("unknown", [x, VarId(7)]);
    unknown.add_satisfying_tuples(vec![vec![1, 2]]).unwrap();
    assert!(matches!(
        csp.add_constraint(unknown),
        Err(CspError::UnknownVariable { index: 7, .. })
    ));

    let mut repeated = Constraint::new("repeated", [x, x]);
    repeated.add_satisfying_tuples(vec![vec![1, 1]]).unwrap();
    assert!(matches!(
        csp.add_constraint(repeated),
        Err(CspError::DuplicateScopeVariable { .. })
    ));
}

#[test]
fn test_duplicate_variable_name() {
    let mut csp = Csp::new("t");
    csp.add_variable(var("x", &[1])).unwrap();
    assert_eq!(
        csp.add_variable(var("x", &[2])),
        Err(CspError::DuplicateVariable("x".to_string()))
    );
}

#[test]
fn test_constraint_index_follows_addition_order() {
    let mut csp = Csp::new("t");
    let x = csp.add_variable(var("x", &[1, 2, 3])).unwrap();
    let y = csp.add_variable(var("y", &[1, 2, 3])).unwrap();
    let z = csp.add_variable(var("z", &[1, 2, 3])).unwrap();

    let xy = not_equal(&mut csp, "xy", x, y);
    let yz = not_equal(&mut csp, "yz", y, z);
    let xz = not_equal(&mut csp, "xz", x, z);

    assert_eq!(csp.constraints_with(x), &[xy, xz]);
    assert_eq!(csp.constraints_with(y), &[xy, yz]);
    assert_eq!(csp.constraints_with(z), &[yz, xz]);
    assert_eq!(csp.all_constraints().collect::<Vec<_>>(), vec![xy, yz, xz]);
    assert_eq!(csp.variable_by_name("z"), Some(z));
}

#[test]
fn test_unassigned_queries() {
    let mut csp = Csp::new("t");
    let x = csp.add_variable(var("x", &[1, 2])).unwrap();
    let y = csp.add_variable(var("y", &[1, 2])).unwrap();
    let c = not_equal(&mut csp, "xy", x, y);

    let constraint = csp.constraint(c);
    assert_eq!(constraint.count_unassigned(csp.variables()), 2);

    csp.assign(x, 1).unwrap();
    let constraint = csp.constraint(c);
    assert_eq!(constraint.count_unassigned(csp.variables()), 1);
    assert_eq!(constraint.unassigned_variables(csp.variables()).as_slice(), &[y]);
    assert_eq!(constraint.is_satisfied_by(csp.variables()), None);
    assert_eq!(csp.unassigned_variables(), vec![y]);
}

#[test]
fn test_has_support_respects_current_domains_and_assignments() {
    let mut csp = Csp::new("t");
    let x = csp.add_variable(var("x", &[1, 2])).unwrap();
    let y = csp.add_variable(var("y", &[1, 2])).unwrap();
    let c = not_equal(&mut csp, "xy", x, y);

    assert!(csp.has_support(c, x, 1));
    csp.prune(y, 2);
    assert!(!csp.has_support(c, x, 1));
    assert!(csp.has_support(c, x, 2));

    csp.restore(&[Pruning::new(y, 2)]);
    csp.assign(y, 1).unwrap();
    assert!(!csp.has_support(c, x, 1));
    assert!(csp.has_support(c, x, 2));
}

#[test]
fn test_reset_and_is_solved() {
    let mut csp = Csp::new("t");
    let x = csp.add_variable(var("x", &[1, 2])).unwrap();
    let y = csp.add_variable(var("y", &[1, 2])).unwrap();
    not_equal(&mut csp, "xy", x, y);

    csp.assign(x, 1).unwrap();
    csp.assign(y, 1).unwrap();
    assert!(!csp.is_solved());

    csp.unassign(y);
    csp.assign(y, 2).unwrap();
    assert!(csp.is_solved());
    assert_eq!(csp.assignment(), vec![Some(1), Some(2)]);

    csp.prune(x, 2);
    csp.reset();
    assert_eq!(csp.assignment(), vec![None, None]);
    assert_eq!(csp.variable(x).cur_domain(), vec![1, 2]);
}
