//! Hand-built CSP fixtures.
//!
//! Variables are named `x`, `y`, `z` (triangle) or `x0`, `x1`, ... (chains
//! and all-different), inserted in that order.

use cspforge_core::{Constraint, ConstraintId, Csp, VarId, Variable};

/// All ordered pairs over two domains with different values.
pub fn not_equal_tuples(a: &[i32], b: &[i32]) -> Vec<Vec<i32>> {
    pairs(a, b, |x, y| x != y)
}

/// All ordered pairs over two domains with `x < y`.
pub fn less_than_tuples(a: &[i32], b: &[i32]) -> Vec<Vec<i32>> {
    pairs(a, b, |x, y| x < y)
}

/// All tuples of `arity` distinct values from `domain`.
pub fn all_different_tuples(domain: &[i32], arity: usize) -> Vec<Vec<i32>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(arity);
    permute(domain, arity, &mut current, &mut out);
    out
}

fn permute(domain: &[i32], arity: usize, current: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
    if current.len() == arity {
        out.push(current.clone());
        return;
    }
    for &value in domain {
        if !current.contains(&value) {
            current.push(value);
            permute(domain, arity, current, out);
            current.pop();
        }
    }
}

fn pairs(a: &[i32], b: &[i32], keep: impl Fn(i32, i32) -> bool) -> Vec<Vec<i32>> {
    let mut out = Vec::new();
    for &x in a {
        for &y in b {
            if keep(x, y) {
                out.push(vec![x, y]);
            }
        }
    }
    out
}

/// Adds a variable, panicking on invalid input.
pub fn add_var(csp: &mut Csp<i32>, name: &str, domain: &[i32]) -> VarId {
    let var = Variable::new(name, domain.iter().copied()).expect("valid domain");
    csp.add_variable(var).expect("unique name")
}

/// Adds a table constraint, panicking on invalid input.
pub fn add_table(
    csp: &mut Csp<i32>,
    name: &str,
    scope: &[VarId],
    tuples: Vec<Vec<i32>>,
) -> ConstraintId {
    let mut constraint = Constraint::new(name, scope.iter().copied());
    constraint
        .add_satisfying_tuples(tuples)
        .expect("tuples match scope");
    csp.add_constraint(constraint).expect("valid constraint")
}

/// Three variables with pairwise not-equal constraints `xy`, `yz`, `xz`.
pub fn triangle_csp(domain: &[i32]) -> Csp<i32> {
    let mut csp = Csp::new("triangle");
    let x = add_var(&mut csp, "x", domain);
    let y = add_var(&mut csp, "y", domain);
    let z = add_var(&mut csp, "z", domain);
    add_table(&mut csp, "xy", &[x, y], not_equal_tuples(domain, domain));
    add_table(&mut csp, "yz", &[y, z], not_equal_tuples(domain, domain));
    add_table(&mut csp, "xz", &[x, z], not_equal_tuples(domain, domain));
    csp
}

/// `n` variables linked by `x{i} < x{i+1}` constraints.
pub fn chain_csp(n: usize, domain: &[i32]) -> Csp<i32> {
    let mut csp = Csp::new("chain");
    let vars: Vec<VarId> = (0..n)
        .map(|i| add_var(&mut csp, &format!("x{i}"), domain))
        .collect();
    for pair in vars.windows(2) {
        let name = format!("{}<{}", csp.variable(pair[0]).name(), csp.variable(pair[1]).name());
        add_table(&mut csp, &name, pair, less_than_tuples(domain, domain));
    }
    csp
}

/// `n` variables under one n-ary all-different constraint.
pub fn all_different_csp(n: usize, domain: &[i32]) -> Csp<i32> {
    let mut csp = Csp::new("all-different");
    let vars: Vec<VarId> = (0..n)
        .map(|i| add_var(&mut csp, &format!("x{i}"), domain))
        .collect();
    add_table(&mut csp, "alldiff", &vars, all_different_tuples(domain, n));
    csp
}
