//! Warehouse puzzle instances.
//!
//! Cells use 1-based `(col, row)` coordinates with row 1 at the bottom of
//! the grid. The numeric instance format encodes a cell as `col * 10 + row`,
//! which limits parsed grids to 9 × 9.

use std::collections::HashSet;

use crate::error::{ModelError, Result};

/// Largest grid the `col * 10 + row` cell encoding can express.
pub const MAX_ENCODED_SIZE: usize = 9;

/// A room of the warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Variable name of the room, e.g. `R12` for column 1, row 2.
    pub fn name(&self) -> String {
        format!("R{}{}", self.col, self.row)
    }

    /// Position in a grid of size `n` as `(visual row, column)`, both 0-based.
    pub fn grid_index(&self, n: usize) -> (usize, usize) {
        (n - self.row, self.col - 1)
    }
}

/// Aggregate condition on the values of a building's rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingOp {
    /// Every room holds the target.
    Fixed(i32),
    /// Values add up to the target.
    Sum(i32),
    /// The smallest value is at least the target.
    Min(i32),
    /// The largest value is at most the target.
    Max(i32),
}

impl BuildingOp {
    /// Decodes an instance operation code (0 fixed, 1 sum, 2 min, 3 max).
    pub fn from_code(code: i64, target: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Fixed(target)),
            1 => Some(Self::Sum(target)),
            2 => Some(Self::Min(target)),
            3 => Some(Self::Max(target)),
            _ => None,
        }
    }

    pub fn target(&self) -> i32 {
        match *self {
            Self::Fixed(t) | Self::Sum(t) | Self::Min(t) | Self::Max(t) => t,
        }
    }

    /// Returns true if `values` satisfies the condition.
    ///
    /// # Example
    ///
    /// ```
    /// use cspforge_models::BuildingOp;
    ///
    /// assert!(BuildingOp::Sum(4).accepts(&[1, 3]));
    /// assert!(!BuildingOp::Sum(4).accepts(&[2, 3]));
    /// assert!(BuildingOp::Min(2).accepts(&[2, 3]));
    /// assert!(BuildingOp::Max(2).accepts(&[1, 2]));
    /// ```
    pub fn accepts(&self, values: &[i32]) -> bool {
        match *self {
            Self::Fixed(t) => values.iter().all(|&v| v == t),
            Self::Sum(t) => values.iter().sum::<i32>() == t,
            Self::Min(t) => values.iter().all(|&v| v >= t),
            Self::Max(t) => values.iter().all(|&v| v <= t),
        }
    }
}

/// A group of rooms sharing an aggregate condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    pub cells: Vec<Cell>,
    pub operation: BuildingOp,
}

impl Building {
    pub fn new(cells: Vec<Cell>, operation: BuildingOp) -> Self {
        Self { cells, operation }
    }
}

/// A validated puzzle instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseGrid {
    size: usize,
    buildings: Vec<Building>,
}

impl WarehouseGrid {
    /// Creates an instance, checking that the size is in
    /// `1..=MAX_ENCODED_SIZE`, every building is non-empty, every cell lies
    /// inside the grid and no cell belongs to two buildings.
    pub fn new(size: usize, buildings: Vec<Building>) -> Result<Self> {
        if !(1..=MAX_ENCODED_SIZE).contains(&size) {
            return Err(ModelError::InvalidSize(
                i64::try_from(size).unwrap_or(i64::MAX),
            ));
        }
        let mut seen = HashSet::new();
        for (index, building) in buildings.iter().enumerate() {
            if building.cells.is_empty() {
                return Err(ModelError::EmptyBuilding { index: index + 1 });
            }
            for cell in &building.cells {
                if !(1..=size).contains(&cell.col) || !(1..=size).contains(&cell.row) {
                    return Err(ModelError::CellOutOfGrid {
                        col: cell.col as i64,
                        row: cell.row as i64,
                        size,
                    });
                }
                if !seen.insert(*cell) {
                    return Err(ModelError::DuplicateCell {
                        col: cell.col,
                        row: cell.row,
                    });
                }
            }
        }
        Ok(Self { size, buildings })
    }

    /// Parses the numeric instance format.
    ///
    /// The first row is `[n]`; each further row is
    /// `[cell, cell, ..., operation, target]` with cells encoded as
    /// `col * 10 + row`.
    ///
    /// # Example
    ///
    /// ```
    /// use cspforge_models::{BuildingOp, Cell, WarehouseGrid};
    ///
    /// let grid = WarehouseGrid::from_rows(&[vec![2], vec![11, 21, 1, 3]]).unwrap();
    /// assert_eq!(grid.size(), 2);
    /// assert_eq!(grid.buildings()[0].cells, vec![Cell::new(1, 1), Cell::new(2, 1)]);
    /// assert_eq!(grid.buildings()[0].operation, BuildingOp::Sum(3));
    /// ```
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        let (size_row, building_rows) = rows.split_first().ok_or(ModelError::MissingSize)?;
        let raw_size = *size_row.first().ok_or(ModelError::MissingSize)?;
        let size = usize::try_from(raw_size)
            .ok()
            .filter(|s| (1..=MAX_ENCODED_SIZE).contains(s))
            .ok_or(ModelError::InvalidSize(raw_size))?;

        let mut buildings = Vec::with_capacity(building_rows.len());
        for (i, row) in building_rows.iter().enumerate() {
            let index = i + 1;
            let [cells @ .., code, target] = row.as_slice() else {
                return Err(ModelError::MalformedBuilding { index });
            };
            if cells.is_empty() {
                return Err(ModelError::EmptyBuilding { index });
            }
            let target = i32::try_from(*target).map_err(|_| ModelError::InvalidTarget {
                index,
                target: *target,
            })?;
            let operation = BuildingOp::from_code(*code, target)
                .ok_or(ModelError::UnknownOperation { index, code: *code })?;
            let cells = cells
                .iter()
                .map(|&code| decode_cell(code, size))
                .collect::<Result<Vec<_>>>()?;
            buildings.push(Building::new(cells, operation));
        }
        Self::new(size, buildings)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Every cell, top row first, left to right.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let n = self.size;
        (0..n).flat_map(move |i| (0..n).map(move |j| Cell::new(j + 1, n - i)))
    }
}

fn decode_cell(code: i64, size: usize) -> Result<Cell> {
    let (col, row) = (code / 10, code % 10);
    let in_grid = |v: i64| v >= 1 && v <= size as i64;
    if !in_grid(col) || !in_grid(row) {
        return Err(ModelError::CellOutOfGrid { col, row, size });
    }
    Ok(Cell::new(col as usize, row as usize))
}
