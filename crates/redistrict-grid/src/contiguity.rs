//! District contiguity by flood fill.

use crate::{CellIndex, Dimensions, Grid, Label, Neighbors};

/// Whether a set of cells forms a single 4-connected region.
///
/// An empty set is not connected. Indices past the end of the board are
/// ignored.
pub fn is_connected(dims: Dimensions, cells: &[CellIndex]) -> bool {
    let n = dims.cell_count();
    let mut member = vec![false; n];
    let mut count = 0;
    for cell in cells.iter().filter(|c| c.0 < n) {
        if !member[cell.0] {
            member[cell.0] = true;
            count += 1;
        }
    }

    let Some(start) = cells.iter().find(|c| c.0 < n) else {
        return false;
    };

    let mut visited = vec![false; n];
    let mut stack = vec![*start];
    let mut reached = 0;

    while let Some(cell) = stack.pop() {
        if visited[cell.0] {
            continue;
        }
        visited[cell.0] = true;
        reached += 1;

        for next in Neighbors::of_index(dims, cell) {
            if member[next.0] && !visited[next.0] {
                stack.push(next);
            }
        }
    }

    reached == count
}

/// Whether every cell carrying `label` is reachable from every other through
/// edge-adjacent cells with the same label. A label absent from the grid is
/// not contiguous.
pub fn is_contiguous(grid: &Grid, label: Label) -> bool {
    let cells: Vec<CellIndex> = grid.cells_of(label).collect();
    is_connected(grid.dims(), &cells)
}
