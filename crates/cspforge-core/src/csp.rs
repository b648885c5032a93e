//! The CSP container.
//!
//! Owns the variable and constraint arenas and keeps, for every variable,
//! the list of constraints whose scope contains it. The index is updated
//! on every [`Csp::add_constraint`] call, so it is always in sync with the
//! constraint list.

use std::collections::HashMap;
use std::fmt;

use crate::constraint::{Constraint, ConstraintId};
use crate::error::{CspError, Result};
use crate::pruning::Pruning;
use crate::variable::{Value, VarId, Variable};

/// A constraint satisfaction problem.
///
/// # Example
///
/// ```
/// use cspforge_core::{Constraint, Csp, Pruning, Variable};
///
/// let mut csp = Csp::new("demo");
/// let x = csp.add_variable(Variable::new("x", 1..=3).unwrap()).unwrap();
/// let y = csp.add_variable(Variable::new("y", 1..=3).unwrap()).unwrap();
///
/// let mut lt = Constraint::new("x<y", [x, y]);
/// lt.add_satisfying_tuples(vec![vec![1, 2], vec![1, 3], vec![2, 3]]).unwrap();
/// csp.add_constraint(lt).unwrap();
///
/// csp.prune(x, 3);
/// assert_eq!(csp.variable(x).cur_domain(), vec![1, 2]);
/// csp.restore(&[Pruning::new(x, 3)]);
/// assert_eq!(csp.variable(x).cur_domain(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Csp<V> {
    name: String,
    variables: Vec<Variable<V>>,
    constraints: Vec<Constraint<V>>,
    constraints_by_var: Vec<Vec<ConstraintId>>,
    names: HashMap<String, VarId>,
}

impl<V: Value> Csp<V> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
            constraints: Vec::new(),
            constraints_by_var: Vec::new(),
            names: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a variable and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`CspError::DuplicateVariable`] if the name is taken.
    pub fn add_variable(&mut self, variable: Variable<V>) -> Result<VarId> {
        if self.names.contains_key(variable.name()) {
            return Err(CspError::DuplicateVariable(variable.name().to_string()));
        }
        let id = VarId(self.variables.len());
        self.names.insert(variable.name().to_string(), id);
        self.variables.push(variable);
        self.constraints_by_var.push(Vec::new());
        Ok(id)
    }

    /// Adds a constraint and indexes it under every variable of its scope.
    ///
    /// Adding the same constraint twice is not detected; the copy is indexed
    /// again and propagators will examine it twice.
    ///
    /// # Errors
    ///
    /// Fails if the constraint has no table, its scope names an unknown
    /// variable, or a variable appears twice in its scope.
    pub fn add_constraint(&mut self, constraint: Constraint<V>) -> Result<ConstraintId> {
        if !constraint.has_table() {
            return Err(CspError::MissingTable(constraint.name().to_string()));
        }
        for (i, var) in constraint.scope().iter().enumerate() {
            if var.index() >= self.variables.len() {
                return Err(CspError::UnknownVariable {
                    constraint: constraint.name().to_string(),
                    index: var.index(),
                });
            }
            if constraint.scope()[..i].contains(var) {
                return Err(CspError::DuplicateScopeVariable {
                    constraint: constraint.name().to_string(),
                    variable: self.variables[var.index()].name().to_string(),
                });
            }
        }

        let id = ConstraintId(self.constraints.len());
        for var in constraint.scope() {
            self.constraints_by_var[var.index()].push(id);
        }
        self.constraints.push(constraint);
        Ok(id)
    }

    /// Returns the constraints whose scope contains `var`, in addition order.
    pub fn constraints_with(&self, var: VarId) -> &[ConstraintId] {
        &self.constraints_by_var[var.index()]
    }

    /// Returns the ids of all constraints, in addition order.
    pub fn all_constraints(&self) -> impl ExactSizeIterator<Item = ConstraintId> {
        (0..self.constraints.len()).map(ConstraintId)
    }

    pub fn constraints(&self) -> &[Constraint<V>] {
        &self.constraints
    }

    pub fn constraint(&self, id: ConstraintId) -> &Constraint<V> {
        &self.constraints[id.index()]
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Returns the variable arena in insertion order.
    pub fn variables(&self) -> &[Variable<V>] {
        &self.variables
    }

    pub fn variable(&self, id: VarId) -> &Variable<V> {
        &self.variables[id.index()]
    }

    pub fn variable_ids(&self) -> impl ExactSizeIterator<Item = VarId> {
        (0..self.variables.len()).map(VarId)
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn variable_by_name(&self, name: &str) -> Option<VarId> {
        self.names.get(name).copied()
    }

    /// Returns the unassigned variables in insertion order.
    pub fn unassigned_variables(&self) -> Vec<VarId> {
        self.variable_ids()
            .filter(|id| !self.variables[id.index()].is_assigned())
            .collect()
    }

    /// Returns true if `var = value` has a support in constraint `c`.
    pub fn has_support(&self, c: ConstraintId, var: VarId, value: V) -> bool {
        self.constraints[c.index()].has_support(&self.variables, var, value)
    }

    pub fn assign(&mut self, var: VarId, value: V) -> Result<()> {
        self.variables[var.index()].assign(value)
    }

    pub fn unassign(&mut self, var: VarId) {
        self.variables[var.index()].unassign();
    }

    /// Removes `value` from the current domain of `var`.
    pub fn prune(&mut self, var: VarId, value: V) -> bool {
        self.variables[var.index()].prune_value(value)
    }

    /// Undoes a pruning record, most recent pruning first.
    pub fn restore(&mut self, prunings: &[Pruning<V>]) {
        for pruning in prunings.iter().rev() {
            self.variables[pruning.var.index()].unprune_value(pruning.value);
        }
    }

    /// Unassigns every variable and restores every current domain.
    pub fn reset(&mut self) {
        for variable in &mut self.variables {
            variable.unassign();
            variable.restore_cur_domain();
        }
    }

    /// Returns the assigned value of every variable, in insertion order.
    pub fn assignment(&self) -> Vec<Option<V>> {
        self.variables.iter().map(Variable::assigned_value).collect()
    }

    /// Returns true if every variable is assigned and every constraint holds.
    pub fn is_solved(&self) -> bool {
        self.variables.iter().all(Variable::is_assigned)
            && self
                .constraints
                .iter()
                .all(|c| c.is_satisfied_by(&self.variables) == Some(true))
    }
}

impl<V: Value> fmt::Display for Csp<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CSP {}", self.name)?;
        writeln!(f, "   Variables = [")?;
        for variable in &self.variables {
            writeln!(f, "      {variable}")?;
        }
        writeln!(f, "   ]")?;
        writeln!(f, "   Constraints = [")?;
        for constraint in &self.constraints {
            writeln!(f, "      {constraint}")?;
        }
        write!(f, "   ]")
    }
}
