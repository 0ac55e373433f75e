//! Error types for survey data.

use redistrict_grid::Dimensions;
use thiserror::Error;

/// Result type for survey operations.
pub type Result<T> = std::result::Result<T, SurveyError>;

#[derive(Debug, Error)]
pub enum SurveyError {
    /// Plan file could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Plan and vote grid cover different boards
    #[error("plan is {plan} but votes are {votes}")]
    ShapeMismatch { plan: Dimensions, votes: Dimensions },
}
