//! Cell addressing on a rectangular board.
//!
//! Cells are addressed either by `(row, col)` or by their flattened row-major
//! index. Conversions go through [`Dimensions`] since the flattened index
//! depends on the board width.

/// A `(row, col)` position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    /// Row, counted from the top
    pub row: usize,
    /// Column, counted from the left
    pub col: usize,
}

impl CellCoord {
    /// Top-left cell.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed offset, or `None` if that would leave the
    /// non-negative quadrant. Bounds on the far side are checked by
    /// [`Dimensions::contains`].
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Flattened row-major cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellIndex(pub usize);

impl CellIndex {
    /// Create from a raw index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn value(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Board dimensions `H×W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub height: usize,
    pub width: usize,
}

impl Dimensions {
    /// The 5×5 reference board.
    pub const REFERENCE: Self = Self {
        height: crate::GRID_HEIGHT,
        width: crate::GRID_WIDTH,
    };

    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Total number of cells, `H·W`.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.height * self.width
    }

    /// Whether the coordinate lies on the board.
    #[inline]
    pub const fn contains(&self, coord: CellCoord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Flattened index of a coordinate, if it lies on the board.
    pub fn index_of(&self, coord: CellCoord) -> Option<CellIndex> {
        self.contains(coord)
            .then(|| CellIndex(coord.row * self.width + coord.col))
    }

    /// Coordinate of a flattened index.
    ///
    /// The index is not bounds-checked; an index past the end maps to a row
    /// past the bottom of the board.
    #[inline]
    pub const fn coord_of(&self, index: CellIndex) -> CellCoord {
        CellCoord {
            row: index.0 / self.width,
            col: index.0 % self.width,
        }
    }

    /// All flattened indices in row-major order.
    pub fn indices(&self) -> impl Iterator<Item = CellIndex> {
        (0..self.cell_count()).map(CellIndex)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_has_25_cells() {
        assert_eq!(Dimensions::REFERENCE.cell_count(), 25);
    }

    #[test]
    fn index_is_row_major() {
        let dims = Dimensions::new(3, 4);
        assert_eq!(dims.index_of(CellCoord::new(0, 0)), Some(CellIndex(0)));
        assert_eq!(dims.index_of(CellCoord::new(0, 3)), Some(CellIndex(3)));
        assert_eq!(dims.index_of(CellCoord::new(1, 0)), Some(CellIndex(4)));
        assert_eq!(dims.index_of(CellCoord::new(2, 3)), Some(CellIndex(11)));
        assert_eq!(dims.index_of(CellCoord::new(3, 0)), None);
        assert_eq!(dims.index_of(CellCoord::new(0, 4)), None);
    }

    #[test]
    fn coord_and_index_agree() {
        let dims = Dimensions::new(4, 6);
        for index in dims.indices() {
            let coord = dims.coord_of(index);
            assert!(dims.contains(coord));
            assert_eq!(dims.index_of(coord), Some(index));
        }
    }

    #[test]
    fn offset_stops_at_zero() {
        assert_eq!(CellCoord::ORIGIN.offset(-1, 0), None);
        assert_eq!(CellCoord::ORIGIN.offset(0, -1), None);
        assert_eq!(CellCoord::ORIGIN.offset(1, 2), Some(CellCoord::new(1, 2)));
        assert_eq!(CellCoord::new(2, 2).offset(-1, -2), Some(CellCoord::new(1, 0)));
    }
}
