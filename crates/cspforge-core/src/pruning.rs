//! Pruning records.

use std::fmt;

use crate::variable::{Value, VarId};

/// A single value removed from a variable's current domain.
///
/// A propagator call returns its prunings in the order they happened;
/// restoring them puts the current domains back exactly as they were
/// before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pruning<V> {
    pub var: VarId,
    pub value: V,
}

impl<V: Value> Pruning<V> {
    pub fn new(var: VarId, value: V) -> Self {
        Self { var, value }
    }
}

impl<V: Value> fmt::Display for Pruning<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:?}", self.var, self.value)
    }
}
