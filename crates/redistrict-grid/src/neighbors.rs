//! 4-connected neighbor computation.
//!
//! Every interior cell has exactly 4 neighbors; edge cells have 3 and corner
//! cells have 2. Neighbors are always yielded in the order North, South,
//! West, East.

use crate::{CellCoord, CellIndex, Dimensions};

/// One of the four edge-sharing directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All directions, in enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// `(d_row, d_col)` step for this direction.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }

    /// Step from `coord`, or `None` if that leaves the board.
    pub fn step(self, dims: Dimensions, coord: CellCoord) -> Option<CellCoord> {
        let (d_row, d_col) = self.offset();
        coord.offset(d_row, d_col).filter(|c| dims.contains(*c))
    }
}

/// Iterator over the on-board 4-neighbors of a cell.
#[derive(Debug, Clone)]
pub struct Neighbors {
    dims: Dimensions,
    center: CellCoord,
    next: usize,
}

impl Neighbors {
    /// Neighbors of a coordinate.
    pub fn of(dims: Dimensions, center: CellCoord) -> Self {
        Self {
            dims,
            center,
            next: 0,
        }
    }

    /// Neighbors of a flattened index, as flattened indices.
    pub fn of_index(dims: Dimensions, index: CellIndex) -> impl Iterator<Item = CellIndex> {
        Self::of(dims, dims.coord_of(index)).map(move |c| CellIndex(c.row * dims.width + c.col))
    }
}

impl Iterator for Neighbors {
    type Item = CellCoord;

    fn next(&mut self) -> Option<CellCoord> {
        while let Some(direction) = Direction::ALL.get(self.next) {
            self.next += 1;
            if let Some(coord) = direction.step(self.dims, self.center) {
                return Some(coord);
            }
        }
        None
    }
}

/// Count how many of a cell's neighbors satisfy a predicate.
pub fn count_present_neighbors<F>(dims: Dimensions, coord: CellCoord, is_present: F) -> usize
where
    F: Fn(CellCoord) -> bool,
{
    Neighbors::of(dims, coord).filter(|&n| is_present(n)).count()
}
