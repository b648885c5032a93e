//! Warehouse puzzle models.
//!
//! A warehouse is an `n × n` grid of rooms. Every row and column holds the
//! values `1..=n` exactly once, and rooms are grouped into buildings whose
//! values must satisfy an aggregate condition (fixed value, sum, minimum
//! or maximum).
//!
//! Three encodings are provided:
//! - [`binary_ne_grid`]: row/column rules as binary not-equal constraints, no buildings
//! - [`nary_ad_grid`]: row/column rules as n-ary all-different constraints, no buildings
//! - [`full_model`]: all-different rows/columns plus one table constraint per building
//!
//! Every builder returns the CSP and the grid of variables, `grid[i][j]`
//! being visual row `i` (0 is the top row) and column `j`.

pub mod error;
pub mod grid;
pub mod model;


pub use error::ModelError;
pub use grid::{Building, BuildingOp, Cell, WarehouseGrid, MAX_ENCODED_SIZE};
pub use model::{binary_ne_grid, full_model, grid_values, nary_ad_grid, GridModel};
