//! Per-district compactness and grid-wide cut edges.
//!
//! # Perimeter
//!
//! A district's perimeter counts the cell edge-sides of its cells that border
//! either a cell with a different label or the edge of the board. On a unit
//! grid this is the length of the district's boundary.
//!
//! # Polsby–Popper
//!
//! ```text
//! PP = 4π · area / perimeter²
//! ```
//!
//! 1.0 is a circle; long thin shapes approach 0. A 5-cell row on a 5×5 board
//! has area 5 and perimeter 12, so PP = 20π/144 ≈ 0.436. A zero perimeter
//! scores 0 rather than dividing by zero.

use redistrict_grid::{count_present_neighbors, Direction, Grid, Label};
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// Compactness of one district.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistrictMetrics {
    pub label: Label,
    /// Cell count
    pub area: usize,
    /// Exposed cell sides
    pub perimeter: usize,
    pub polsby_popper: f64,
}

/// Compactness of every district in a grid, plus the grid's cut edges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompactnessReport {
    /// Adjacent cell pairs with differing labels, each pair counted once
    pub cut_edges: usize,
    /// One entry per label present, ascending by label
    pub districts: Vec<DistrictMetrics>,
    /// Unweighted mean Polsby–Popper across `districts`
    pub average_score: f64,
}

impl CompactnessReport {
    /// Metrics for one label, if present.
    pub fn district(&self, label: Label) -> Option<&DistrictMetrics> {
        self.districts
            .binary_search_by_key(&label, |d| d.label)
            .ok()
            .map(|i| &self.districts[i])
    }
}

/// Polsby–Popper score for a shape with the given area and perimeter.
pub fn polsby_popper(area: usize, perimeter: usize) -> f64 {
    if perimeter == 0 {
        return 0.0;
    }
    let p = perimeter as f64;
    4.0 * PI * area as f64 / (p * p)
}

/// Number of horizontally or vertically adjacent cell pairs whose labels
/// differ.
pub fn cut_edges(grid: &Grid) -> usize {
    let dims = grid.dims();
    grid.iter()
        .map(|(index, label)| {
            let coord = dims.coord_of(index);
            [Direction::South, Direction::East]
                .into_iter()
                .filter_map(|d| d.step(dims, coord))
                .filter(|&n| grid.get(n) != Some(label))
                .count()
        })
        .sum()
}

/// Score every district present in a grid.
///
/// Works for any number of labels; nothing about the districting rules is
/// assumed.
pub fn score(grid: &Grid) -> CompactnessReport {
    let dims = grid.dims();
    let mut shapes: BTreeMap<Label, (usize, usize)> = BTreeMap::new();

    for (index, label) in grid.iter() {
        let coord = dims.coord_of(index);
        let same = count_present_neighbors(dims, coord, |n| grid.get(n) == Some(label));
        let exposed = Direction::ALL.len() - same;

        let (area, perimeter) = shapes.entry(label).or_default();
        *area += 1;
        *perimeter += exposed;
    }

    let districts: Vec<DistrictMetrics> = shapes
        .into_iter()
        .map(|(label, (area, perimeter))| DistrictMetrics {
            label,
            area,
            perimeter,
            polsby_popper: polsby_popper(area, perimeter),
        })
        .collect();

    let average_score = if districts.is_empty() {
        0.0
    } else {
        districts.iter().map(|d| d.polsby_popper).sum::<f64>() / districts.len() as f64
    };

    CompactnessReport {
        cut_edges: cut_edges(grid),
        districts,
        average_score,
    }
}
