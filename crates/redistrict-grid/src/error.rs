//! Error types for grid construction and shape checks.

use crate::Dimensions;
use thiserror::Error;

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised while building grids or checking that they fit together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or rows with no cells
    #[error("grid must have at least one row and one column")]
    Empty,

    /// Rows of differing length
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Flat cell buffer does not match the dimensions
    #[error("{dims} grid needs {expected} cells, got {found}")]
    CellCount {
        dims: Dimensions,
        expected: usize,
        found: usize,
    },

    /// No plans were supplied where at least one is required
    #[error("at least one plan is required")]
    EmptyInput,

    /// A plan's dimensions differ from the first plan's
    #[error("plan {plan} is {found}, expected {expected}")]
    ShapeMismatch {
        plan: usize,
        expected: Dimensions,
        found: Dimensions,
    },

    /// The board cannot be split into the requested districts
    #[error("{dims} grid has {cells} cells, cannot split into {districts} districts of {cells_per_district}")]
    RulesMismatch {
        dims: Dimensions,
        cells: usize,
        districts: usize,
        cells_per_district: usize,
    },
}
