//! CspForge - A table-constraint CSP solver in Rust
//!
//! Build a [`Csp`] from variables and satisfying-tuple constraints (or use
//! one of the warehouse puzzle models), then call [`solve`] with a
//! [`SearchConfig`] or [`run_solver`] to pick up `search.toml`.
//!
//! # Example
//!
//! ```rust
//! use cspforge::prelude::*;
//!
//! let grid = WarehouseGrid::from_rows(&[vec![2], vec![11, 0, 1]]).unwrap();
//! let (mut csp, vars) = full_model(&grid).unwrap();
//!
//! let outcome = solve(&mut csp, &SearchConfig::default()).unwrap();
//! assert_eq!(outcome.solutions.len(), 1);
//! assert_eq!(grid_values(&csp, &vars), Some(vec![vec![2, 1], vec![1, 2]]));
//! ```

// Domain model
pub use cspforge_core::{
    Constraint, ConstraintId, Csp, CspError, Pruning, TupleTable, Value, VarId, Variable,
};

// Configuration
pub use cspforge_config::{
    ConfigError, PropagatorType, SearchConfig, TerminationConfig, VariableOrderingType,
};

// Propagation and search
pub use cspforge_solver::{
    BacktrackCheck, BacktrackingSearch, ForwardChecking, GeneralizedArcConsistency,
    Propagation, Propagator, SearchBuilder, SearchError, SearchOutcome, SearchStats,
    SearchStatus, Solution, Termination, VariableSelector,
};

// Warehouse puzzle
pub use cspforge_models::{
    binary_ne_grid, full_model, grid_values, nary_ad_grid, Building, BuildingOp, Cell,
    GridModel, ModelError, WarehouseGrid,
};

#[cfg(feature = "console")]
pub mod console;

mod solver;
pub use solver::{run_solver, solve};

pub mod prelude {
    pub use super::{run_solver, solve};
    pub use super::{Constraint, Csp, TupleTable, VarId, Variable};
    pub use super::{PropagatorType, SearchConfig, VariableOrderingType};
    pub use super::{SearchOutcome, SearchStatus, Solution};
    pub use super::{binary_ne_grid, full_model, grid_values, nary_ad_grid, WarehouseGrid};
}
