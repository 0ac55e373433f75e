//! Redistrict Survey
//!
//! Plan sources and election outcomes for the reference board.
//!
//! - **Dataset**: the 20 built-in survey plans and JSON plan records
//! - **Votes**: the reference voter grid and per-district winners

mod dataset;
mod error;
mod votes;

pub use dataset::{PlanGroup, PlanKind, PlanRecord, Survey};
pub use error::{Result, SurveyError};
pub use votes::{district_winners, Party, SeatTally, VoteGrid};
