//! Grid cell coordinates.
//!
//! A [`Cell`] is a `(row, col)` pair on a rectangular grid. Coordinates are
//! signed so that neighbor candidates can be computed before bounds checking;
//! the grid itself only ever contains non-negative coordinates.

use std::ops::{Add, Sub};

/// A position on a rectangular grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Row index (top to bottom).
    pub row: i64,
    /// Column index (left to right).
    pub col: i64,
}

impl Cell {
    /// Origin cell (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// The four axis-aligned neighbor directions, in the canonical
    /// expansion order: up, down, left, right.
    ///
    /// This order is a load-bearing tie-break: it decides which sibling is
    /// discovered first during search, and every downstream consumer
    /// (recorded neighbour lists, tree child order, layout rank) depends on
    /// it being reproduced exactly.
    pub const DIRECTIONS: [Self; 4] = [
        Self { row: -1, col: 0 }, // up
        Self { row: 1, col: 0 },  // down
        Self { row: 0, col: -1 }, // left
        Self { row: 0, col: 1 },  // right
    ];

    /// The four axis-aligned neighbors, in up/down/left/right order.
    ///
    /// Candidates only: callers filter against grid bounds and walls.
    pub fn neighbors4(&self) -> [Self; 4] {
        Self::DIRECTIONS.map(|d| *self + d)
    }

    /// Manhattan distance to another cell.
    pub fn manhattan_distance(&self, other: &Self) -> u64 {
        (self.row - other.row).unsigned_abs() + (self.col - other.col).unsigned_abs()
    }

    /// The canonical packed identifier for this cell.
    pub fn id(&self) -> CellId {
        CellId::of(*self)
    }

    /// Human-readable label, e.g. `"(2, 3)"`.
    pub fn label(&self) -> String {
        format!("({}, {})", self.row, self.col)
    }
}

impl Add for Cell {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            row: self.row + other.row,
            col: self.col + other.col,
        }
    }
}

impl Sub for Cell {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            row: self.row - other.row,
            col: self.col - other.col,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Canonical packed key for a cell: row and col as the two 32-bit halves
/// of a `u64`.
///
/// Unique per cell for all coordinates representable in 32 bits, which
/// covers any grid this crate addresses. Displays as `row,col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub u64);

impl CellId {
    /// Pack a cell into its identifier.
    #[inline]
    pub const fn of(cell: Cell) -> Self {
        Self(((cell.row as i32 as u32 as u64) << 32) | (cell.col as i32 as u32 as u64))
    }

    /// Raw packed value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Unpack back into a cell.
    pub const fn cell(&self) -> Cell {
        Cell {
            row: (self.0 >> 32) as u32 as i32 as i64,
            col: self.0 as u32 as i32 as i64,
        }
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cell = self.cell();
        write!(f, "{},{}", cell.row, cell.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_zero() {
        assert_eq!(Cell::ORIGIN.row, 0);
        assert_eq!(Cell::ORIGIN.col, 0);
    }

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let c = Cell::new(5, 5);
        let n = c.neighbors4();
        assert_eq!(n[0], Cell::new(4, 5)); // up
        assert_eq!(n[1], Cell::new(6, 5)); // down
        assert_eq!(n[2], Cell::new(5, 4)); // left
        assert_eq!(n[3], Cell::new(5, 6)); // right
    }

    #[test]
    fn neighbors_are_at_distance_one() {
        for n in Cell::ORIGIN.neighbors4() {
            assert_eq!(n.manhattan_distance(&Cell::ORIGIN), 1);
        }
    }

    #[test]
    fn directions_are_unique() {
        let dirs = Cell::DIRECTIONS;
        for i in 0..dirs.len() {
            for j in (i + 1)..dirs.len() {
                assert_ne!(dirs[i], dirs[j]);
            }
        }
    }

    #[test]
    fn addition_subtraction() {
        let a = Cell::new(1, 2);
        let b = Cell::new(4, -1);

        assert_eq!(a + b, Cell::new(5, 1));
        assert_eq!(a - b, Cell::new(-3, 3));
    }

    #[test]
    fn id_round_trips() {
        let cells = [
            Cell::ORIGIN,
            Cell::new(3, 7),
            Cell::new(19, 0),
            Cell::new(-1, 2),
        ];
        for c in cells {
            assert_eq!(c.id().cell(), c);
        }
    }

    #[test]
    fn ids_are_distinct_for_distinct_cells() {
        // row/col pairs that naive packing schemes collapse
        let a = Cell::new(1, 0);
        let b = Cell::new(0, 1);
        assert_ne!(a.id(), b.id());

        let c = Cell::new(2, 3);
        let d = Cell::new(3, 2);
        assert_ne!(c.id(), d.id());
    }

    #[test]
    fn id_display_is_row_comma_col() {
        assert_eq!(Cell::new(4, 9).id().to_string(), "4,9");
    }

    #[test]
    fn label_format() {
        assert_eq!(Cell::new(2, 3).label(), "(2, 3)");
    }
}
