//! CspForge Solver Engine
//!
//! This crate provides the propagation engine and the search driver:
//! - Propagators (plain backtrack check, forward checking, GAC)
//! - Variable ordering heuristics
//! - Termination conditions
//! - Depth-first backtracking search with prune/restore bookkeeping
//! - Configuration wiring (builder module)

pub mod builder;
pub mod ordering;
pub mod propagator;
pub mod scope;
pub mod search;
pub mod stats;
pub mod termination;

pub use builder::{ConfiguredSearch, ConfiguredTermination, SearchBuilder};
pub use ordering::{DegreeHeuristic, FirstUnassigned, MinimumRemainingValues, VariableSelector};
pub use propagator::{
    BacktrackCheck, ForwardChecking, GeneralizedArcConsistency, Propagation, Propagator,
};
pub use scope::SearchScope;
pub use search::{BacktrackingSearch, SearchError, SearchOutcome, SearchStatus, Solution};
pub use stats::SearchStats;
pub use termination::{
    AndTermination, NodeCountTermination, OrTermination, SolutionCountTermination, Termination,
    TimeTermination,
};
