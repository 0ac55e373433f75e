//! Rectangular grid of district labels.

use crate::error::{GridError, Result};
use crate::{CellCoord, CellIndex, Dimensions};
use std::collections::BTreeSet;

/// A district label. Values are arbitrary; only equality matters.
pub type Label = i32;

/// An immutable `H×W` grid of district labels, stored row-major.
///
/// With the `serde` feature a grid serializes as nested rows,
/// `[[0, 0, 1], [2, 2, 1]]`, and deserialization rejects ragged input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Label>>", into = "Vec<Vec<Label>>")
)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Label>,
}

impl Grid {
    /// Build a grid from nested rows.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: AsRef<[Label]>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, values) in rows.into_iter().enumerate() {
            let values = values.as_ref();
            let expected = *width.get_or_insert(values.len());
            if values.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self {
                dims: Dimensions::new(height, width),
                cells,
            }),
            _ => Err(GridError::Empty),
        }
    }

    /// Build a grid from a flat row-major buffer.
    pub fn from_cells(dims: Dimensions, cells: Vec<Label>) -> Result<Self> {
        if dims.cell_count() == 0 {
            return Err(GridError::Empty);
        }
        if cells.len() != dims.cell_count() {
            return Err(GridError::CellCount {
                dims,
                expected: dims.cell_count(),
                found: cells.len(),
            });
        }
        Ok(Self { dims, cells })
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    /// Row-major labels.
    #[inline]
    pub fn cells(&self) -> &[Label] {
        &self.cells
    }

    /// Label at a coordinate, if on the board.
    pub fn get(&self, coord: CellCoord) -> Option<Label> {
        self.dims.index_of(coord).map(|i| self.cells[i.0])
    }

    /// Label at a flattened index.
    ///
    /// # Panics
    ///
    /// Panics if the index is past the end of the grid.
    #[inline]
    pub fn label(&self, index: CellIndex) -> Label {
        self.cells[index.0]
    }

    /// `(index, label)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, Label)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &label)| (CellIndex(i), label))
    }

    /// Rows as owned vectors.
    pub fn rows(&self) -> Vec<Vec<Label>> {
        self.cells
            .chunks(self.dims.width)
            .map(<[Label]>::to_vec)
            .collect()
    }

    /// Distinct labels, ascending.
    pub fn labels(&self) -> BTreeSet<Label> {
        self.cells.iter().copied().collect()
    }

    /// Cells carrying a label, in row-major order.
    pub fn cells_of(&self, label: Label) -> impl Iterator<Item = CellIndex> + '_ {
        self.iter()
            .filter(move |&(_, l)| l == label)
            .map(|(i, _)| i)
    }

    /// Number of cells carrying a label.
    pub fn area(&self, label: Label) -> usize {
        self.cells.iter().filter(|&&l| l == label).count()
    }

    /// A copy with every label passed through `f`.
    pub fn relabel<F>(&self, f: F) -> Self
    where
        F: Fn(Label) -> Label,
    {
        Self {
            dims: self.dims,
            cells: self.cells.iter().map(|&l| f(l)).collect(),
        }
    }
}

impl<const H: usize, const W: usize> From<[[Label; W]; H]> for Grid {
    fn from(rows: [[Label; W]; H]) -> Self {
        const { assert!(H > 0 && W > 0, "grid must have at least one row and one column") };
        Self {
            dims: Dimensions::new(H, W),
            cells: rows.concat(),
        }
    }
}

impl TryFrom<Vec<Vec<Label>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Label>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Label>> {
    fn from(grid: Grid) -> Self {
        grid.rows()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.chunks(self.dims.width).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|l| l.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
