//! CSP encodings of the warehouse puzzle.

use std::sync::Arc;

use cspforge_core::{Constraint, Csp, TupleTable, VarId, Variable};
use tracing::debug;

use crate::error::Result;
use crate::grid::WarehouseGrid;

/// A CSP and its variables laid out as the visual grid.
pub type GridModel = (Csp<i32>, Vec<Vec<VarId>>);

/// Grid model with binary not-equal constraints for rows and columns.
///
/// Buildings are ignored.
///
/// # Example
///
/// ```
/// use cspforge_models::{binary_ne_grid, WarehouseGrid};
///
/// let grid = WarehouseGrid::from_rows(&[vec![3]]).unwrap();
/// let (csp, vars) = binary_ne_grid(&grid).unwrap();
/// assert_eq!(csp.variable_count(), 9);
/// // 3 pairs per row and per column
/// assert_eq!(csp.constraint_count(), 18);
/// assert_eq!(csp.variable(vars[0][0]).name(), "R13");
/// ```
pub fn binary_ne_grid(grid: &WarehouseGrid) -> Result<GridModel> {
    let n = grid.size();
    let mut csp = Csp::new(format!("Warehouse-{n}"));
    let vars = grid_variables(grid, &mut csp)?;

    let values = domain(n);
    let table = Arc::new(TupleTable::from_tuples(
        2,
        product(&values, 2).filter(|t| t[0] != t[1]),
    )?);

    for i in 0..n {
        for j in 0..n {
            for k in j + 1..n {
                add_pair(&mut csp, &table, vars[i][j], vars[i][k])?;
            }
            for k in i + 1..n {
                add_pair(&mut csp, &table, vars[i][j], vars[k][j])?;
            }
        }
    }

    log_model("binary_ne_grid", &csp);
    Ok((csp, vars))
}

/// Grid model with one n-ary all-different constraint per row and column.
///
/// Buildings are ignored.
pub fn nary_ad_grid(grid: &WarehouseGrid) -> Result<GridModel> {
    let n = grid.size();
    let mut csp = Csp::new(format!("Warehouse-{n}"));
    let vars = grid_variables(grid, &mut csp)?;
    add_all_different(&mut csp, &vars)?;

    log_model("nary_ad_grid", &csp);
    Ok((csp, vars))
}

/// Full model: all-different rows and columns plus one table constraint per
/// building.
///
/// A building's table holds every combination of `1..=n` over its rooms
/// that the building's operation accepts.
pub fn full_model(grid: &WarehouseGrid) -> Result<GridModel> {
    let n = grid.size();
    let mut csp = Csp::new(format!("Warehouse-{n}"));
    let vars = grid_variables(grid, &mut csp)?;
    let values = domain(n);

    for (index, building) in grid.buildings().iter().enumerate() {
        let scope: Vec<VarId> = building
            .cells
            .iter()
            .map(|cell| {
                let (i, j) = cell.grid_index(n);
                vars[i][j]
            })
            .collect();
        let tuples = product(&values, scope.len()).filter(|t| building.operation.accepts(t));

        let mut constraint = Constraint::new(format!("C(Building{})", index + 1), scope);
        constraint.add_satisfying_tuples(tuples)?;
        csp.add_constraint(constraint)?;
    }
    add_all_different(&mut csp, &vars)?;

    log_model("full_model", &csp);
    Ok((csp, vars))
}

/// Reads the assigned values back in grid layout, or `None` if a room is
/// unassigned.
pub fn grid_values(csp: &Csp<i32>, vars: &[Vec<VarId>]) -> Option<Vec<Vec<i32>>> {
    vars.iter()
        .map(|line| {
            line.iter()
                .map(|&id| csp.variable(id).assigned_value())
                .collect()
        })
        .collect()
}

fn domain(n: usize) -> Vec<i32> {
    (1..=n as i32).collect()
}

/// One variable per room, top row first.
fn grid_variables(grid: &WarehouseGrid, csp: &mut Csp<i32>) -> Result<Vec<Vec<VarId>>> {
    let n = grid.size();
    let mut vars = vec![Vec::with_capacity(n); n];
    for cell in grid.cells() {
        let (i, _) = cell.grid_index(n);
        let id = csp.add_variable(Variable::new(cell.name(), domain(n))?)?;
        vars[i].push(id);
    }
    Ok(vars)
}

fn add_pair(csp: &mut Csp<i32>, table: &Arc<TupleTable<i32>>, a: VarId, b: VarId) -> Result<()> {
    let name = format!("C({},{})", csp.variable(a).name(), csp.variable(b).name());
    let mut constraint = Constraint::new(name, [a, b]);
    constraint.set_table(Arc::clone(table))?;
    csp.add_constraint(constraint)?;
    Ok(())
}

fn add_all_different(csp: &mut Csp<i32>, vars: &[Vec<VarId>]) -> Result<()> {
    let n = vars.len();
    let values = domain(n);
    let table = Arc::new(TupleTable::from_tuples(n, permutations(&values))?);

    for i in 0..n {
        let row = n - i;
        let mut constraint = Constraint::new(format!("C(Row{row})"), vars[i].iter().copied());
        constraint.set_table(Arc::clone(&table))?;
        csp.add_constraint(constraint)?;
    }
    for j in 0..n {
        let column = vars.iter().map(|line| line[j]);
        let mut constraint = Constraint::new(format!("C(Col{})", j + 1), column);
        constraint.set_table(Arc::clone(&table))?;
        csp.add_constraint(constraint)?;
    }
    Ok(())
}

/// Every ordering of `values`, in lexicographic order of positions.
fn permutations(values: &[i32]) -> Vec<Vec<i32>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(values.len());
    let mut used = vec![false; values.len()];
    permute(values, &mut used, &mut current, &mut out);
    out
}

fn permute(values: &[i32], used: &mut [bool], current: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
    if current.len() == values.len() {
        out.push(current.clone());
        return;
    }
    for k in 0..values.len() {
        if !used[k] {
            used[k] = true;
            current.push(values[k]);
            permute(values, used, current, out);
            current.pop();
            used[k] = false;
        }
    }
}

/// Every tuple of `arity` values from `values`, in lexicographic order.
fn product(values: &[i32], arity: usize) -> impl Iterator<Item = Vec<i32>> + '_ {
    let mut odometer = vec![0usize; arity];
    let mut done = values.is_empty();
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let tuple = odometer.iter().map(|&k| values[k]).collect();
        done = true;
        for digit in odometer.iter_mut().rev() {
            *digit += 1;
            if *digit < values.len() {
                done = false;
                break;
            }
            *digit = 0;
        }
        Some(tuple)
    })
}

fn log_model(kind: &str, csp: &Csp<i32>) {
    debug!(
        event = "model_built",
        model = kind,
        csp = csp.name(),
        variable_count = csp.variable_count() as u64,
        constraint_count = csp.constraint_count() as u64,
    );
}
