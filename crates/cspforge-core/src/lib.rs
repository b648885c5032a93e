//! CspForge Core - Domain model for finite-domain constraint satisfaction
//!
//! This crate provides the fundamental abstractions for CspForge:
//! - Variables with a declared domain and a pruneable current domain
//! - Table constraints over an ordered scope of variables
//! - The CSP container, which indexes constraints by variable
//! - Pruning records used to undo propagation on backtrack

pub mod constraint;
pub mod csp;
pub mod error;
pub mod pruning;
pub mod table;
pub mod variable;

#[cfg(test)]
mod tests;

pub use constraint::{Constraint, ConstraintId};
pub use csp::Csp;
pub use error::CspError;
pub use pruning::Pruning;
pub use table::TupleTable;
pub use variable::{Value, VarId, Variable};
