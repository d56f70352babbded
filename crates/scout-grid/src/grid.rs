//! Rectangular occupancy grid.
//!
//! Cells are either open or blocked. Dimensions are fixed for the lifetime
//! of a grid; the search engine reads the grid, never mutates it.

use crate::{Cell, GridError, Result};

/// A rectangular `rows x cols` occupancy map.
///
/// Stored row-major as a flat boolean vector (`true` = blocked).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    blocked: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell open.
    pub fn open(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            blocked: vec![false; rows * cols],
        }
    }

    /// Build a grid from occupancy rows (0 = open, nonzero = blocked).
    ///
    /// Validates rectangularity: every row must have the same length as the
    /// first. Ragged input is a configuration error caught here, before any
    /// search runs.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
        }

        let blocked = rows
            .iter()
            .flat_map(|row| row.iter().map(|&v| v != 0))
            .collect();

        Ok(Self {
            rows: rows.len(),
            cols,
            blocked,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the cell lies within the grid bounds.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    /// Whether the cell is blocked. Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        if !self.in_bounds(cell) {
            return true;
        }
        self.blocked[cell.row as usize * self.cols + cell.col as usize]
    }

    /// Whether the cell is in bounds and open.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_blocked(cell)
    }

    /// Mark a cell blocked or open. Out-of-bounds cells are ignored.
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) {
        if self.in_bounds(cell) {
            self.blocked[cell.row as usize * self.cols + cell.col as usize] = blocked;
        }
    }

    /// The passable four-connected neighbors of a cell, in the canonical
    /// up/down/left/right order.
    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbors4().into_iter().filter(|&n| self.is_open(n))
    }
}
