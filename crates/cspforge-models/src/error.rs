//! Error types for warehouse models

use cspforge_core::CspError;
use thiserror::Error;

/// Invalid puzzle instances and model-building failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The instance has no size row
    #[error("Puzzle has no size row")]
    MissingSize,

    /// Grid size outside the supported range
    #[error("Invalid grid size: {0}")]
    InvalidSize(i64),

    /// A building row is too short to hold a cell, an operation and a target
    #[error("Building {index} is malformed: expected cells, operation and target")]
    MalformedBuilding { index: usize },

    /// A building lists no cells
    #[error("Building {index} has no cells")]
    EmptyBuilding { index: usize },

    /// Operation code outside 0..=3
    #[error("Building {index} has unknown operation code {code}")]
    UnknownOperation { index: usize, code: i64 },

    /// Target does not fit a cell value
    #[error("Building {index} has out-of-range target {target}")]
    InvalidTarget { index: usize, target: i64 },

    /// A cell lies outside the grid
    #[error("Cell R{col}{row} is outside a {size}x{size} grid")]
    CellOutOfGrid { col: i64, row: i64, size: usize },

    /// A cell belongs to two buildings
    #[error("Cell R{col}{row} belongs to more than one building")]
    DuplicateCell { col: usize, row: usize },

    /// The CSP rejected a variable or constraint
    #[error(transparent)]
    Csp(#[from] CspError),
}

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
