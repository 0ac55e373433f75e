//! Label-invariant cell affinity.
//!
//! Entry `(i, j)` is the fraction of plans in which cells `i` and `j` carry
//! the same label. Only label equality within a plan is used, so plans whose
//! labels are permuted produce the same matrix.
//!
//! Building the matrix is `O(cells² · plans)`; fine for a 25-cell board.

use crate::error::Result;
use redistrict_grid::{check_same_shape, CellIndex, Dimensions, Grid};

/// Dense symmetric co-occurrence matrix over flattened cell indices.
#[derive(Debug, Clone, PartialEq)]
pub struct CoOccurrence {
    dims: Dimensions,
    plans: usize,
    values: Vec<f64>,
}

impl CoOccurrence {
    /// Build the matrix from plans sharing one shape.
    pub fn from_plans(plans: &[Grid]) -> Result<Self> {
        let dims = check_same_shape(plans)?;
        let n = dims.cell_count();
        let mut counts = vec![0u32; n * n];

        for plan in plans {
            let cells = plan.cells();
            for i in 0..n {
                for j in i..n {
                    if cells[i] == cells[j] {
                        counts[i * n + j] += 1;
                        if i != j {
                            counts[j * n + i] += 1;
                        }
                    }
                }
            }
        }

        let total = plans.len() as f64;
        Ok(Self {
            dims,
            plans: plans.len(),
            values: counts.into_iter().map(|c| f64::from(c) / total).collect(),
        })
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Number of plans the matrix was built from.
    #[inline]
    pub fn plan_count(&self) -> usize {
        self.plans
    }

    /// Fraction of plans in which `a` and `b` share a label.
    ///
    /// # Panics
    ///
    /// Panics if either index is past the end of the board.
    #[inline]
    pub fn get(&self, a: CellIndex, b: CellIndex) -> f64 {
        self.values[a.0 * self.dims.cell_count() + b.0]
    }

    /// Mean affinity between `candidate` and each of `members`, summed in
    /// member order. Zero for no members.
    pub fn mean_affinity(&self, candidate: CellIndex, members: &[CellIndex]) -> f64 {
        if members.is_empty() {
            return 0.0;
        }
        let sum: f64 = members.iter().map(|&m| self.get(candidate, m)).sum();
        sum / members.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConsensusError;
    use redistrict_grid::GridError;

    fn grid<const W: usize>(rows: &[[i32; W]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn single_plan_is_indicator() {
        let plan = grid(&[[0, 0], [1, 2]]);
        let m = CoOccurrence::from_plans(&[plan]).unwrap();
        assert_eq!(m.plan_count(), 1);
        assert_eq!(m.get(CellIndex(0), CellIndex(1)), 1.0);
        assert_eq!(m.get(CellIndex(0), CellIndex(2)), 0.0);
        assert_eq!(m.get(CellIndex(2), CellIndex(3)), 0.0);
    }

    #[test]
    fn fractions_over_plans() {
        let plans = [
            grid(&[[0, 0], [1, 1]]),
            grid(&[[0, 1], [0, 1]]),
            grid(&[[5, 5], [5, 7]]),
            grid(&[[3, 3], [4, 4]]),
        ];
        let m = CoOccurrence::from_plans(&plans).unwrap();
        assert_eq!(m.get(CellIndex(0), CellIndex(1)), 0.75);
        assert_eq!(m.get(CellIndex(0), CellIndex(2)), 0.5);
        assert_eq!(m.get(CellIndex(1), CellIndex(3)), 0.25);
        assert_eq!(m.get(CellIndex(0), CellIndex(3)), 0.0);
    }

    #[test]
    fn symmetric_with_unit_diagonal() {
        let plans = [
            grid(&[[0, 1, 1], [0, 2, 2], [0, 1, 2]]),
            grid(&[[4, 4, 4], [3, 3, 3], [9, 9, 9]]),
            grid(&[[1, 2, 3], [1, 2, 3], [1, 2, 3]]),
        ];
        let m = CoOccurrence::from_plans(&plans).unwrap();
        for a in m.dims().indices() {
            assert_eq!(m.get(a, a), 1.0);
            for b in m.dims().indices() {
                assert_eq!(m.get(a, b), m.get(b, a));
                assert!((0.0..=1.0).contains(&m.get(a, b)));
            }
        }
    }

    #[test]
    fn relabeled_plans_give_same_matrix() {
        let plan = grid(&[[0, 0, 1], [2, 1, 1], [2, 2, 0]]);
        let relabeled = plan.relabel(|l| 10 - l);
        let a = CoOccurrence::from_plans(&[plan]).unwrap();
        let b = CoOccurrence::from_plans(&[relabeled]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mean_affinity_averages_members() {
        let plans = [grid(&[[0, 0], [1, 1]]), grid(&[[0, 1], [0, 1]])];
        let m = CoOccurrence::from_plans(&plans).unwrap();
        // cell 0 vs {1, 2}: (0.5 + 0.5) / 2
        assert_eq!(m.mean_affinity(CellIndex(0), &[CellIndex(1), CellIndex(2)]), 0.5);
        // cell 3 vs {1, 0}: (0.5 + 0.0) / 2
        assert_eq!(m.mean_affinity(CellIndex(3), &[CellIndex(1), CellIndex(0)]), 0.25);
        assert_eq!(m.mean_affinity(CellIndex(3), &[]), 0.0);
    }

    #[test]
    fn rejects_empty_and_mismatched() {
        assert_eq!(
            CoOccurrence::from_plans(&[]).unwrap_err(),
            ConsensusError::Input(GridError::EmptyInput)
        );
        let err = CoOccurrence::from_plans(&[grid(&[[0, 0]]), grid(&[[0], [0]])]).unwrap_err();
        assert!(matches!(err, ConsensusError::Input(GridError::ShapeMismatch { plan: 1, .. })));
    }
}
