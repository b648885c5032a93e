//! Satisfying-tuple tables.
//!
//! A table enumerates every joint assignment a constraint allows. Besides
//! membership it keeps a support index from `(scope position, value)` to the
//! tuples carrying that value at that position, so support queries only walk
//! the tuples that could possibly help.
//!
//! Tables are immutable once built and are shared between constraints
//! through `Arc`: every row of an all-different grid model points at the
//! same table.

use std::collections::{HashMap, HashSet};

use crate::error::{CspError, Result};
use crate::variable::Value;

/// An immutable set of allowed tuples of a fixed arity.
///
/// # Example
///
/// ```
/// use cspforge_core::TupleTable;
///
/// let ne = TupleTable::from_tuples(2, vec![vec![1, 2], vec![2, 1]]).unwrap();
/// assert!(ne.contains(&[1, 2]));
/// assert!(!ne.contains(&[1, 1]));
/// assert_eq!(ne.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TupleTable<V> {
    arity: usize,
    tuples: Vec<Vec<V>>,
    members: HashSet<Vec<V>>,
    supports: HashMap<(usize, V), Vec<usize>>,
}

impl<V: Value> TupleTable<V> {
    /// Creates an empty table of the given arity.
    pub fn new(arity: usize) -> Self {
        Self {
            arity,
            tuples: Vec::new(),
            members: HashSet::new(),
            supports: HashMap::new(),
        }
    }

    /// Builds a table from an iterator of tuples.
    ///
    /// Duplicate tuples are stored once.
    ///
    /// # Errors
    ///
    /// Returns [`CspError::ArityMismatch`] if any tuple has the wrong length.
    pub fn from_tuples<I>(arity: usize, tuples: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<V>>,
    {
        let mut table = Self::new(arity);
        table.extend(tuples)?;
        Ok(table)
    }

    /// Adds tuples to the table.
    pub fn extend<I>(&mut self, tuples: I) -> Result<()>
    where
        I: IntoIterator<Item = Vec<V>>,
    {
        for tuple in tuples {
            if tuple.len() != self.arity {
                return Err(CspError::ArityMismatch {
                    context: "satisfying tuple".to_string(),
                    expected: self.arity,
                    found: tuple.len(),
                });
            }
            if !self.members.insert(tuple.clone()) {
                continue;
            }
            let index = self.tuples.len();
            for (position, value) in tuple.iter().enumerate() {
                self.supports
                    .entry((position, *value))
                    .or_default()
                    .push(index);
            }
            self.tuples.push(tuple);
        }
        Ok(())
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Returns true if `tuple` is an allowed joint assignment.
    pub fn contains(&self, tuple: &[V]) -> bool {
        self.members.contains(tuple)
    }

    /// Iterates over the tuples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &[V]> {
        self.tuples.iter().map(Vec::as_slice)
    }

    /// Returns the tuples that carry `value` at `position`.
    pub fn supports_of(&self, position: usize, value: V) -> impl Iterator<Item = &[V]> {
        self.supports
            .get(&(position, value))
            .into_iter()
            .flatten()
            .map(move |&i| self.tuples[i].as_slice())
    }
}
