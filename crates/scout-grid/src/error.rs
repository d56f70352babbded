//! Error types for scout-grid.

use thiserror::Error;

/// Result type for scout-grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors detected when constructing a grid from caller input.
#[derive(Debug, Error)]
pub enum GridError {
    /// Input rows were not all the same length.
    #[error("ragged grid: row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
