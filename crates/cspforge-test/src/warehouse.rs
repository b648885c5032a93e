//! Warehouse puzzle instances.
//!
//! Rows follow the numeric instance format: the first row holds the grid
//! size, every further row lists a building's cells (`col * 10 + row`,
//! row 1 at the bottom) followed by an operation code and a target.
//! Operation codes: 0 fixed, 1 sum, 2 minimum, 3 maximum.

/// A grid of size `n` with no buildings.
pub fn empty_grid_rows(n: i64) -> Vec<Vec<i64>> {
    vec![vec![n]]
}

/// A 3×3 instance with exactly one solution.
///
/// The solution, top row first, is:
///
/// ```text
/// 1 2 3
/// 2 3 1
/// 3 1 2
/// ```
pub fn unique_3x3_rows() -> Vec<Vec<i64>> {
    vec![
        vec![3],
        vec![13, 0, 1],
        vec![23, 33, 1, 5],
        vec![12, 22, 2, 2],
        vec![32, 31, 3, 2],
        vec![11, 0, 3],
        vec![21, 0, 1],
    ]
}

/// The unique solution of [`unique_3x3_rows`], top row first.
pub fn unique_3x3_solution() -> Vec<Vec<i32>> {
    vec![vec![1, 2, 3], vec![2, 3, 1], vec![3, 1, 2]]
}

/// A 2×2 instance whose fixed cells contradict each other.
///
/// Both cells of the bottom row are fixed to 1.
pub fn contradictory_2x2_rows() -> Vec<Vec<i64>> {
    vec![
        vec![2],
        vec![11, 0, 1],
        vec![21, 0, 1],
        vec![12, 22, 1, 3],
    ]
}
