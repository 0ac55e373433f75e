//! Redistrict Grid
//!
//! Labeled district grids on a small rectangular board.
//!
//! # Conventions
//!
//! A grid is `H×W` cells, stored row-major and 0-indexed. The flattened
//! index of cell `(row, col)` is `row * W + col`. Every cell carries exactly
//! one integer district label; label values need not be contiguous.
//!
//! Adjacency is 4-connected: two cells are neighbors when they share an edge,
//! never when they only touch at a corner. Neighbors are always enumerated in
//! the fixed order North, South, West, East so that anything iterating over
//! them is deterministic.
//!
//! # Districting Rules
//!
//! The reference board is 5×5 split into 5 districts of 5 cells each. A plan
//! is valid when it has exactly `D` labels, each covering exactly `K` cells,
//! each forming one 4-connected region.

mod cell;
mod contiguity;
mod error;
mod grid;
mod neighbors;
mod validate;

pub use cell::{CellCoord, CellIndex, Dimensions};
pub use contiguity::{is_connected, is_contiguous};
pub use error::{GridError, Result};
pub use grid::{Grid, Label};
pub use neighbors::{count_present_neighbors, Direction, Neighbors};
pub use validate::{check_dimensions, check_same_shape, validate_plan, DistrictRules, PlanViolation};

/// Rows on the reference board.
pub const GRID_HEIGHT: usize = 5;

/// Columns on the reference board.
pub const GRID_WIDTH: usize = 5;

/// Districts in a reference plan.
pub const DISTRICT_COUNT: usize = 5;

/// Cells in each district of a reference plan.
pub const CELLS_PER_DISTRICT: usize = 5;

// The reference board must split evenly into districts
const _: () = assert!(GRID_HEIGHT * GRID_WIDTH == DISTRICT_COUNT * CELLS_PER_DISTRICT);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_board_partitions_evenly() {
        assert_eq!(
            GRID_HEIGHT * GRID_WIDTH,
            DISTRICT_COUNT * CELLS_PER_DISTRICT
        );
    }

    #[test]
    fn default_rules_match_reference_board() {
        let rules = DistrictRules::default();
        assert_eq!(rules.districts, DISTRICT_COUNT);
        assert_eq!(rules.cells_per_district, CELLS_PER_DISTRICT);
        assert!(check_dimensions(Dimensions::REFERENCE, rules).is_ok());
    }
}
