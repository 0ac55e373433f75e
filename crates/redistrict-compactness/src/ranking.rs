//! Ranking plans by compactness.
//!
//! Plans are ordered by mean Polsby–Popper, highest first. Equal means are
//! broken by cut edges, fewest first. Plans equal on both keep their input
//! order.

use crate::metrics::{score, CompactnessReport};
use redistrict_grid::Grid;
use std::cmp::Ordering;

/// The two ranking keys for one plan.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanScore {
    pub cut_edges: usize,
    pub average_score: f64,
}

impl From<&CompactnessReport> for PlanScore {
    fn from(report: &CompactnessReport) -> Self {
        Self {
            cut_edges: report.cut_edges,
            average_score: report.average_score,
        }
    }
}

/// A plan's place in a ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedPlan<M> {
    /// 1-based position
    pub rank: usize,
    /// Whatever identifies the plan to the caller
    pub metadata: M,
    pub cut_edges: usize,
    pub average_score: f64,
}

/// Order two scores: better first.
pub fn compare_compactness(a: &PlanScore, b: &PlanScore) -> Ordering {
    b.average_score
        .total_cmp(&a.average_score)
        .then_with(|| a.cut_edges.cmp(&b.cut_edges))
}

/// Rank already-scored plans.
pub fn rank_scored<M>(plans: impl IntoIterator<Item = (PlanScore, M)>) -> Vec<RankedPlan<M>> {
    let mut scored: Vec<(PlanScore, M)> = plans.into_iter().collect();
    // sort_by is stable, so exact ties keep input order
    scored.sort_by(|(a, _), (b, _)| compare_compactness(a, b));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (score, metadata))| RankedPlan {
            rank: i + 1,
            metadata,
            cut_edges: score.cut_edges,
            average_score: score.average_score,
        })
        .collect()
}

/// Score each plan and rank them.
pub fn rank_by_compactness<'a, M>(plans: impl IntoIterator<Item = (&'a Grid, M)>) -> Vec<RankedPlan<M>> {
    rank_scored(
        plans
            .into_iter()
            .map(|(grid, metadata)| (PlanScore::from(&score(grid)), metadata)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_score(average_score: f64, cut_edges: usize) -> PlanScore {
        PlanScore {
            cut_edges,
            average_score,
        }
    }

    #[test]
    fn higher_average_wins_regardless_of_cut_edges() {
        let ranked = rank_scored([
            (plan_score(0.40, 8), "B"),
            (plan_score(0.50, 10), "A"),
        ]);
        assert_eq!(ranked[0].metadata, "A");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].metadata, "B");
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn cut_edges_break_ties() {
        let ranked = rank_scored([
            (plan_score(0.45, 14), "more cuts"),
            (plan_score(0.45, 12), "fewer cuts"),
        ]);
        assert_eq!(ranked[0].metadata, "fewer cuts");
    }

    #[test]
    fn exact_ties_keep_input_order() {
        let ranked = rank_scored([
            (plan_score(0.3, 20), 1),
            (plan_score(0.6, 20), 2),
            (plan_score(0.3, 20), 3),
            (plan_score(0.3, 20), 4),
        ]);
        let order: Vec<_> = ranked.iter().map(|r| r.metadata).collect();
        assert_eq!(order, vec![2, 1, 3, 4]);
    }

    #[test]
    fn ranks_grids_end_to_end() {
        let stripes = Grid::from_rows([
            [0, 0, 0, 0, 0],
            [1, 1, 1, 1, 1],
            [2, 2, 2, 2, 2],
            [3, 3, 3, 3, 3],
            [4, 4, 4, 4, 4],
        ])
        .unwrap();
        let blocky = Grid::from_rows([
            [0, 0, 1, 1, 1],
            [0, 0, 1, 1, 2],
            [0, 4, 2, 2, 2],
            [4, 4, 2, 3, 3],
            [4, 4, 3, 3, 3],
        ])
        .unwrap();

        let ranked = rank_by_compactness([(&stripes, "stripes"), (&blocky, "blocky")]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].metadata, "blocky");
        assert!(ranked[0].average_score > ranked[1].average_score);
        assert_eq!(ranked[1].cut_edges, 20);
    }

    #[test]
    fn empty_ranking() {
        let ranked: Vec<RankedPlan<()>> = rank_by_compactness(std::iter::empty());
        assert!(ranked.is_empty());
    }
}
