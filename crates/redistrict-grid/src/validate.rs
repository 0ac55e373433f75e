//! Shape checks and plan validation.
//!
//! Validation runs in stages and stops after the first stage that finds a
//! problem, so a plan with the wrong number of districts is not also
//! reported for district sizes:
//!
//! 1. exactly `D` distinct labels
//! 2. each label `0..D` covers exactly `K` cells
//! 3. each label `0..D` is 4-contiguous
//!
//! A plan with `D` distinct labels that are not `0..D` fails stage 2, since
//! some expected label has no cells.
//!
//! Messages number districts from 1 (`label + 1`).

use crate::error::{GridError, Result};
use crate::{is_contiguous, Dimensions, Grid, Label, CELLS_PER_DISTRICT, DISTRICT_COUNT};
use thiserror::Error;

/// Required district count and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistrictRules {
    /// Number of districts, `D`
    pub districts: usize,
    /// Cells in each district, `K`
    pub cells_per_district: usize,
}

impl DistrictRules {
    pub const fn new(districts: usize, cells_per_district: usize) -> Self {
        Self {
            districts,
            cells_per_district,
        }
    }

    /// Cells covered by a full plan, `D·K`, or `None` if that overflows.
    pub const fn cell_count(&self) -> Option<usize> {
        self.districts.checked_mul(self.cells_per_district)
    }

    /// The labels a valid plan uses, `0..D`.
    pub fn labels(&self) -> impl Iterator<Item = Label> {
        (0..=Label::MAX).take(self.districts)
    }
}

impl Default for DistrictRules {
    fn default() -> Self {
        Self::new(DISTRICT_COUNT, CELLS_PER_DISTRICT)
    }
}

/// One reason a plan is not a valid districting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanViolation {
    #[error("Must have exactly {expected} districts. Found {found}.")]
    DistrictCount { expected: usize, found: usize },

    #[error(
        "District {} has {found} cells. Each district must have exactly {expected} cells.",
        district_number(.label)
    )]
    DistrictSize {
        label: Label,
        expected: usize,
        found: usize,
    },

    #[error(
        "District {} is not contiguous. All cells must connect by sides (not corners).",
        district_number(.label)
    )]
    NotContiguous { label: Label },
}

fn district_number(label: &Label) -> i64 {
    i64::from(*label) + 1
}

/// Check that a board of `dims` splits into `rules.districts` districts of
/// `rules.cells_per_district` cells.
pub fn check_dimensions(dims: Dimensions, rules: DistrictRules) -> Result<()> {
    if rules.cell_count() != Some(dims.cell_count()) || rules.cells_per_district == 0 {
        return Err(GridError::RulesMismatch {
            dims,
            cells: dims.cell_count(),
            districts: rules.districts,
            cells_per_district: rules.cells_per_district,
        });
    }
    Ok(())
}

/// Check that there is at least one plan and all plans share the first
/// plan's dimensions. Returns those dimensions.
pub fn check_same_shape<'a, I>(plans: I) -> Result<Dimensions>
where
    I: IntoIterator<Item = &'a Grid>,
{
    let mut plans = plans.into_iter();
    let expected = plans.next().ok_or(GridError::EmptyInput)?.dims();

    for (i, plan) in plans.enumerate() {
        if plan.dims() != expected {
            return Err(GridError::ShapeMismatch {
                plan: i + 1,
                expected,
                found: plan.dims(),
            });
        }
    }
    Ok(expected)
}

/// Validate a plan against the districting rules.
pub fn validate_plan(grid: &Grid, rules: DistrictRules) -> std::result::Result<(), Vec<PlanViolation>> {
    let labels = grid.labels();
    if labels.len() != rules.districts {
        return Err(vec![PlanViolation::DistrictCount {
            expected: rules.districts,
            found: labels.len(),
        }]);
    }

    let wrong_size: Vec<_> = rules
        .labels()
        .map(|label| (label, grid.area(label)))
        .filter(|&(_, area)| area != rules.cells_per_district)
        .map(|(label, found)| PlanViolation::DistrictSize {
            label,
            expected: rules.cells_per_district,
            found,
        })
        .collect();
    if !wrong_size.is_empty() {
        return Err(wrong_size);
    }

    let split: Vec<_> = rules
        .labels()
        .filter(|&label| !is_contiguous(grid, label))
        .map(|label| PlanViolation::NotContiguous { label })
        .collect();
    if !split.is_empty() {
        return Err(split);
    }

    Ok(())
}
