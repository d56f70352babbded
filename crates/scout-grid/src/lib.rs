//! Scout Grid Model
//!
//! Rectangular occupancy grids for four-connected search.
//!
//! # Coordinates
//!
//! Cells are addressed by `(row, col)` with row 0 at the top. Movement is
//! four-connected: up, down, left, right, no diagonals.
//!
//! # Deterministic neighbor order
//!
//! Neighbor enumeration always yields candidates in the fixed order
//! **up, down, left, right**. This ordering is part of the crate's contract:
//! search traces, tree child order, and layout all depend on it, so two runs
//! over the same grid are byte-identical.

mod cell;
mod error;
mod grid;

pub use cell::{Cell, CellId};
pub use error::{GridError, Result};
pub use grid::Grid;

/// Number of neighbor directions per cell (four-connected movement).
pub const NEIGHBOR_COUNT: usize = 4;

// Compile-time assertion that the direction table matches the invariant
const _: () = assert!(Cell::DIRECTIONS.len() == NEIGHBOR_COUNT);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn direction_count_invariant() {
        assert_eq!(Cell::DIRECTIONS.len(), NEIGHBOR_COUNT);
    }

    proptest! {
        #[test]
        fn cell_id_round_trips(row in -1000i64..1000, col in -1000i64..1000) {
            let cell = Cell::new(row, col);
            prop_assert_eq!(cell.id().cell(), cell);
        }

        #[test]
        fn cell_ids_injective(
            a_row in 0i64..100, a_col in 0i64..100,
            b_row in 0i64..100, b_col in 0i64..100,
        ) {
            let a = Cell::new(a_row, a_col);
            let b = Cell::new(b_row, b_col);
            prop_assert_eq!(a.id() == b.id(), a == b);
        }

        #[test]
        fn bounds_check_agrees_with_dimensions(
            rows in 0usize..30, cols in 0usize..30,
            row in -5i64..35, col in -5i64..35,
        ) {
            let grid = Grid::open(rows, cols);
            let expected = row >= 0
                && col >= 0
                && (row as usize) < rows
                && (col as usize) < cols;
            prop_assert_eq!(grid.in_bounds(Cell::new(row, col)), expected);
        }
    }
}
