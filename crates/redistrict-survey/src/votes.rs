//! Voter preferences and district outcomes.
//!
//! Each cell holds one voter, either Clubs (0) or Hearts (1). A district goes
//! to Hearts only when Hearts voters strictly outnumber Clubs voters in it;
//! a tie goes to Clubs.

use crate::error::{Result, SurveyError};
use redistrict_grid::{Dimensions, Grid, Label};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    Hearts,
    Clubs,
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Party::Hearts => write!(f, "Hearts"),
            Party::Clubs => write!(f, "Clubs"),
        }
    }
}

/// Per-cell voter preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteGrid {
    dims: Dimensions,
    votes: Vec<Party>,
}

const REFERENCE_VOTES: [[i32; 5]; 5] = [
    [0, 0, 1, 1, 1],
    [1, 1, 1, 0, 1],
    [0, 0, 1, 0, 1],
    [0, 0, 0, 1, 0],
    [0, 1, 0, 1, 0],
];

impl VoteGrid {
    /// The reference board's voters: 12 Hearts, 13 Clubs.
    pub fn reference() -> Self {
        let votes = REFERENCE_VOTES
            .concat()
            .into_iter()
            .map(|v| if v == 1 { Party::Hearts } else { Party::Clubs })
            .collect();
        Self {
            dims: Dimensions::REFERENCE,
            votes,
        }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }
}

/// Count of districts (or voters) per party.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatTally {
    pub hearts: usize,
    pub clubs: usize,
}

impl FromIterator<Party> for SeatTally {
    fn from_iter<I: IntoIterator<Item = Party>>(iter: I) -> Self {
        let mut tally = SeatTally::default();
        for party in iter {
            match party {
                Party::Hearts => tally.hearts += 1,
                Party::Clubs => tally.clubs += 1,
            }
        }
        tally
    }
}

/// Winning party of each label present in `plan`.
///
/// For a plan that passed validation these are exactly the labels `0..D`.
pub fn district_winners(plan: &Grid, votes: &VoteGrid) -> Result<BTreeMap<Label, Party>> {
    if plan.dims() != votes.dims {
        return Err(SurveyError::ShapeMismatch {
            plan: plan.dims(),
            votes: votes.dims,
        });
    }

    let mut counts: BTreeMap<Label, SeatTally> = BTreeMap::new();
    for ((_, label), party) in plan.iter().zip(&votes.votes) {
        let tally = counts.entry(label).or_default();
        match party {
            Party::Hearts => tally.hearts += 1,
            Party::Clubs => tally.clubs += 1,
        }
    }

    Ok(counts
        .into_iter()
        .map(|(label, t)| {
            let winner = if t.hearts > t.clubs {
                Party::Hearts
            } else {
                Party::Clubs
            };
            (label, winner)
        })
        .collect())
}
