//! Survey plans.
//!
//! The built-in survey holds the 20 plans collected for the reference board:
//! ten drawn to be neutral and ten drawn to represent Hearts voters. A
//! [`Survey`] is a plain immutable value; callers pass it (or plans loaded
//! from a file) into the consensus and scoring code explicitly.

use crate::error::Result;
use redistrict_grid::{Grid, Label};
use serde::{Deserialize, Serialize};

/// Why a plan was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Neutral,
    HeartsRepresentative,
}

impl std::fmt::Display for PlanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanKind::Neutral => write!(f, "neutral"),
            PlanKind::HeartsRepresentative => write!(f, "hearts_representative"),
        }
    }
}

/// A group of plans to build one consensus from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanGroup {
    All,
    Only(PlanKind),
}

impl PlanGroup {
    /// The groups reported side by side: all, neutral, hearts.
    pub const REPORTED: [PlanGroup; 3] = [
        PlanGroup::All,
        PlanGroup::Only(PlanKind::Neutral),
        PlanGroup::Only(PlanKind::HeartsRepresentative),
    ];

    pub fn contains(&self, kind: PlanKind) -> bool {
        match self {
            PlanGroup::All => true,
            PlanGroup::Only(k) => *k == kind,
        }
    }

    /// Heading used in reports.
    pub fn title(&self) -> &'static str {
        match self {
            PlanGroup::All => "All Plans",
            PlanGroup::Only(PlanKind::Neutral) => "Neutral Plans",
            PlanGroup::Only(PlanKind::HeartsRepresentative) => "Hearts Plans",
        }
    }
}

/// One submitted or built-in plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub name: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: PlanKind,
    pub districts: Grid,
}

/// An ordered, immutable collection of plans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Survey {
    plans: Vec<PlanRecord>,
}

impl Survey {
    pub fn new(plans: Vec<PlanRecord>) -> Self {
        Self { plans }
    }

    /// The 20 built-in survey plans, neutral first.
    pub fn builtin() -> Self {
        let neutral = NEUTRAL_PLANS
            .iter()
            .map(|rows| (PlanKind::Neutral, rows));
        let hearts = HEARTS_PLANS
            .iter()
            .map(|rows| (PlanKind::HeartsRepresentative, rows));

        let plans = neutral
            .chain(hearts)
            .enumerate()
            .map(|(i, (kind, rows))| PlanRecord {
                name: format!("Base Plan {}", i + 1),
                kind,
                districts: Grid::from(*rows),
            })
            .collect();
        Self { plans }
    }

    /// Parse a JSON array of plan records.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn plans(&self) -> &[PlanRecord] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Plans in a group, in survey order.
    pub fn group(&self, group: PlanGroup) -> impl Iterator<Item = &PlanRecord> + '_ {
        self.plans.iter().filter(move |p| group.contains(p.kind))
    }

    /// Grids of the plans in a group, in survey order.
    pub fn grids(&self, group: PlanGroup) -> Vec<Grid> {
        self.group(group).map(|p| p.districts.clone()).collect()
    }
}

type PlanRows = [[Label; 5]; 5];

const NEUTRAL_PLANS: [PlanRows; 10] = [
    [[0, 0, 0, 1, 1], [2, 0, 0, 3, 1], [2, 4, 4, 3, 1], [2, 4, 4, 3, 1], [2, 2, 4, 3, 3]],
    [[0, 0, 0, 1, 1], [0, 0, 2, 2, 1], [2, 2, 2, 1, 1], [4, 4, 4, 3, 3], [4, 4, 3, 3, 3]],
    [[0, 0, 1, 1, 1], [0, 0, 1, 1, 2], [0, 4, 2, 2, 2], [4, 4, 2, 3, 3], [4, 4, 3, 3, 3]],
    [[0, 0, 0, 0, 0], [1, 1, 2, 2, 2], [1, 3, 3, 3, 2], [1, 3, 4, 4, 2], [1, 3, 4, 4, 4]],
    [[0, 4, 3, 2, 1], [0, 4, 3, 2, 1], [0, 4, 3, 2, 1], [0, 4, 3, 2, 1], [0, 4, 3, 2, 1]],
    [[0, 0, 0, 0, 0], [1, 1, 1, 1, 1], [2, 2, 2, 2, 2], [3, 3, 3, 3, 3], [4, 4, 4, 4, 4]],
    [[0, 0, 1, 1, 1], [0, 0, 0, 1, 1], [4, 4, 3, 3, 3], [4, 4, 4, 3, 3], [2, 2, 2, 2, 2]],
    [[2, 2, 2, 2, 1], [0, 0, 3, 2, 1], [0, 3, 3, 4, 1], [0, 3, 3, 4, 1], [0, 4, 4, 4, 1]],
    [[0, 0, 3, 3, 3], [1, 0, 3, 2, 2], [1, 0, 3, 2, 2], [1, 0, 4, 2, 4], [1, 1, 4, 4, 4]],
    [[0, 4, 4, 4, 3], [0, 4, 3, 3, 3], [0, 4, 3, 2, 2], [0, 0, 1, 1, 2], [1, 1, 1, 2, 2]],
];

const HEARTS_PLANS: [PlanRows; 10] = [
    [[0, 0, 0, 2, 1], [0, 0, 2, 2, 1], [4, 4, 2, 2, 1], [4, 4, 3, 3, 1], [4, 3, 3, 3, 1]],
    [[0, 0, 2, 2, 1], [0, 0, 0, 2, 1], [4, 4, 2, 2, 1], [4, 4, 4, 3, 1], [3, 3, 3, 3, 1]],
    [[0, 0, 0, 1, 1], [4, 4, 0, 1, 1], [4, 4, 0, 1, 2], [4, 3, 3, 2, 2], [3, 3, 3, 2, 2]],
    [[0, 0, 0, 2, 1], [0, 0, 2, 2, 1], [4, 4, 2, 2, 1], [4, 4, 3, 3, 1], [4, 3, 3, 3, 1]],
    [[0, 2, 2, 2, 1], [0, 3, 2, 2, 1], [0, 3, 3, 3, 1], [0, 4, 4, 3, 1], [0, 4, 4, 4, 1]],
    [[3, 3, 4, 4, 0], [3, 3, 3, 4, 0], [2, 2, 4, 4, 0], [2, 2, 1, 1, 0], [2, 1, 1, 1, 0]],
    [[0, 0, 0, 0, 0], [1, 1, 1, 1, 1], [2, 2, 3, 3, 4], [2, 2, 3, 4, 4], [2, 3, 3, 4, 4]],
    [[0, 1, 2, 3, 4], [0, 1, 2, 3, 4], [0, 1, 2, 3, 4], [0, 1, 2, 3, 4], [0, 1, 2, 3, 4]],
    [[2, 2, 4, 4, 4], [2, 2, 2, 1, 4], [0, 0, 1, 1, 4], [0, 0, 0, 1, 1], [3, 3, 3, 3, 3]],
    [[0, 0, 0, 2, 2], [0, 0, 2, 2, 2], [1, 1, 3, 3, 3], [1, 1, 1, 3, 3], [4, 4, 4, 4, 4]],
];
