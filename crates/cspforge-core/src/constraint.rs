//! Table constraints.
//!
//! A constraint restricts an ordered scope of variables to the tuples listed
//! in its satisfying-tuple table. Tuple positions follow scope order.
//!
//! Constraints hold [`VarId`]s rather than variables, so every query that
//! depends on assignments or current domains takes the variable arena
//! (`csp.variables()`) as an argument.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::{CspError, Result};
use crate::table::TupleTable;
use crate::variable::{Value, VarId, Variable};

/// Inline storage for scopes; most constraints are binary or row-sized.
pub type Scope = SmallVec<[VarId; 8]>;

/// Index of a constraint inside its [`Csp`](crate::Csp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintId(pub usize);

impl ConstraintId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// A constraint given extensionally by its satisfying tuples.
///
/// # Example
///
/// ```
/// use cspforge_core::{Constraint, Csp, Variable};
///
/// let mut csp = Csp::new("pair");
/// let x = csp.add_variable(Variable::new("x", vec![1, 2]).unwrap()).unwrap();
/// let y = csp.add_variable(Variable::new("y", vec![1, 2]).unwrap()).unwrap();
///
/// let mut ne = Constraint::new("x!=y", [x, y]);
/// ne.add_satisfying_tuples(vec![vec![1, 2], vec![2, 1]]).unwrap();
/// assert!(ne.check(&[1, 2]));
/// assert!(!ne.check(&[2, 2]));
///
/// let c = csp.add_constraint(ne).unwrap();
/// assert_eq!(csp.constraints_with(x), &[c]);
/// ```
#[derive(Debug, Clone)]
pub struct Constraint<V> {
    name: String,
    scope: Scope,
    table: Option<Arc<TupleTable<V>>>,
}

impl<V: Value> Constraint<V> {
    /// Creates a constraint over `scope` with no table attached yet.
    pub fn new(name: impl Into<String>, scope: impl IntoIterator<Item = VarId>) -> Self {
        Self {
            name: name.into(),
            scope: scope.into_iter().collect(),
            table: None,
        }
    }

    /// Attaches a shared satisfying-tuple table.
    ///
    /// # Errors
    ///
    /// Fails if a table is already attached or the table arity differs from
    /// the scope length.
    pub fn set_table(&mut self, table: Arc<TupleTable<V>>) -> Result<()> {
        if self.table.is_some() {
            return Err(CspError::TableAlreadyAttached(self.name.clone()));
        }
        if table.arity() != self.scope.len() {
            return Err(CspError::ArityMismatch {
                context: format!("table of {}", self.name),
                expected: self.scope.len(),
                found: table.arity(),
            });
        }
        self.table = Some(table);
        Ok(())
    }

    /// Builds a table from `tuples` and attaches it.
    pub fn add_satisfying_tuples<I>(&mut self, tuples: I) -> Result<()>
    where
        I: IntoIterator<Item = Vec<V>>,
    {
        let table = TupleTable::from_tuples(self.scope.len(), tuples)?;
        self.set_table(Arc::new(table))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered scope.
    pub fn scope(&self) -> &[VarId] {
        &self.scope
    }

    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    pub fn table(&self) -> Option<&TupleTable<V>> {
        self.table.as_deref()
    }

    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    /// Returns true if the scope contains `var`.
    pub fn involves(&self, var: VarId) -> bool {
        self.scope.contains(&var)
    }

    /// Returns true if `values` (in scope order) is a satisfying tuple.
    pub fn check(&self, values: &[V]) -> bool {
        self.table.as_ref().is_some_and(|t| t.contains(values))
    }

    /// Returns the scope variables that have no assigned value.
    pub fn unassigned_variables(&self, vars: &[Variable<V>]) -> Scope {
        self.scope
            .iter()
            .copied()
            .filter(|id| !vars[id.index()].is_assigned())
            .collect()
    }

    pub fn count_unassigned(&self, vars: &[Variable<V>]) -> usize {
        self.scope
            .iter()
            .filter(|id| !vars[id.index()].is_assigned())
            .count()
    }

    /// Returns the assigned values in scope order, or `None` if any scope
    /// variable is still unassigned.
    pub fn assigned_values(&self, vars: &[Variable<V>]) -> Option<Vec<V>> {
        self.scope
            .iter()
            .map(|id| vars[id.index()].assigned_value())
            .collect()
    }

    /// Returns `Some(satisfied)` once every scope variable is assigned.
    pub fn is_satisfied_by(&self, vars: &[Variable<V>]) -> Option<bool> {
        self.assigned_values(vars).map(|values| self.check(&values))
    }

    /// Returns true if `var = value` extends to a satisfying tuple.
    ///
    /// A supporting tuple must hold `value` at `var`'s position and, at every
    /// other position, a value still in that variable's current domain.
    /// Assigned variables only accept their assigned value there.
    pub fn has_support(&self, vars: &[Variable<V>], var: VarId, value: V) -> bool {
        let (Some(table), Some(position)) = (
            self.table.as_ref(),
            self.scope.iter().position(|id| *id == var),
        ) else {
            return false;
        };
        table
            .supports_of(position, value)
            .any(|tuple| self.tuple_is_valid(vars, tuple))
    }

    fn tuple_is_valid(&self, vars: &[Variable<V>], tuple: &[V]) -> bool {
        self.scope
            .iter()
            .zip(tuple)
            .all(|(id, value)| vars[id.index()].in_cur_domain(*value))
    }
}

impl<V> fmt::Display for Constraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, id) in self.scope.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, ")")
    }
}
