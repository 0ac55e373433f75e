//! Contiguity-constrained greedy growth over the co-occurrence matrix.
//!
//! # Growth
//!
//! Seeds are taken in row-major order. Each unassigned seed opens a new
//! district, which then grows one cell at a time:
//!
//! 1. Candidates are the unassigned cells 4-adjacent to the district, in
//!    ascending index order.
//! 2. If there are none, candidates are all unassigned cells, again in
//!    ascending index order. The district is then marked relaxed: it may
//!    not be contiguous.
//! 3. The candidate with the highest mean affinity to the current members
//!    joins. Ties go to the earliest candidate.
//!
//! Growth stops at `K` cells. Labels are handed out `0, 1, 2, ...` in seed
//! order. When `H·W = D·K` this yields exactly `D` districts of `K` cells.

use crate::cooccurrence::CoOccurrence;
use crate::error::Result;
use redistrict_grid::{check_dimensions, CellIndex, DistrictRules, Grid, Label, Neighbors};
use tracing::{debug, warn};

/// Builds a consensus districting from many plans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsensusBuilder {
    rules: DistrictRules,
}

/// A consensus districting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consensus {
    grid: Grid,
    relaxed: Vec<Label>,
}

impl Consensus {
    /// The consensus labels.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Districts that took at least one non-adjacent cell because no
    /// adjacent one was left.
    pub fn relaxed_districts(&self) -> &[Label] {
        &self.relaxed
    }

    /// Whether every district was grown through adjacent cells only.
    pub fn is_fully_contiguous(&self) -> bool {
        self.relaxed.is_empty()
    }
}

impl ConsensusBuilder {
    /// Builder for the reference 5 districts of 5 cells.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: DistrictRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> DistrictRules {
        self.rules
    }

    /// Build the consensus of `plans`.
    ///
    /// Fails if `plans` is empty, if the plans differ in shape, or if the
    /// board does not split into the configured districts.
    pub fn build(&self, plans: &[Grid]) -> Result<Consensus> {
        let affinity = CoOccurrence::from_plans(plans)?;
        let dims = affinity.dims();
        check_dimensions(dims, self.rules)?;

        let n = dims.cell_count();
        debug!(plans = affinity.plan_count(), cells = n, "co-occurrence built");
        let mut labels: Vec<Label> = vec![0; n];
        let mut assigned = vec![false; n];
        let mut relaxed = Vec::new();
        let mut next_label: Label = 0;

        for seed in dims.indices() {
            if assigned[seed.0] {
                continue;
            }

            let label = next_label;
            next_label += 1;

            let mut in_district = vec![false; n];
            let mut members = vec![seed];
            assigned[seed.0] = true;
            in_district[seed.0] = true;
            labels[seed.0] = label;

            let mut was_relaxed = false;
            while members.len() < self.rules.cells_per_district {
                let unassigned: Vec<CellIndex> =
                    dims.indices().filter(|c| !assigned[c.0]).collect();
                if unassigned.is_empty() {
                    break;
                }

                let adjacent: Vec<CellIndex> = unassigned
                    .iter()
                    .copied()
                    .filter(|&c| Neighbors::of_index(dims, c).any(|nb| in_district[nb.0]))
                    .collect();

                let candidates = if adjacent.is_empty() {
                    if !was_relaxed {
                        warn!(
                            district = label,
                            size = members.len(),
                            "no adjacent cell left, growing from all unassigned cells"
                        );
                    }
                    was_relaxed = true;
                    unassigned
                } else {
                    adjacent
                };

                let Some(best) = best_candidate(&affinity, &candidates, &members) else {
                    break;
                };
                assigned[best.0] = true;
                in_district[best.0] = true;
                labels[best.0] = label;
                members.push(best);
            }

            debug!(district = label, cells = ?members, relaxed = was_relaxed, "district grown");
            if was_relaxed {
                relaxed.push(label);
            }
        }

        Ok(Consensus {
            grid: Grid::from_cells(dims, labels)?,
            relaxed,
        })
    }
}

/// Build a consensus with the given rules.
pub fn build_consensus(plans: &[Grid], rules: DistrictRules) -> Result<Consensus> {
    ConsensusBuilder::with_rules(rules).build(plans)
}

/// First candidate with the strictly highest mean affinity to `members`.
fn best_candidate(
    affinity: &CoOccurrence,
    candidates: &[CellIndex],
    members: &[CellIndex],
) -> Option<CellIndex> {
    let mut best: Option<(CellIndex, f64)> = None;
    for &candidate in candidates {
        let score = affinity.mean_affinity(candidate, members);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(cell, _)| cell)
}
