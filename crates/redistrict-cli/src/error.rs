//! Error types for the command-line tool.

use redistrict_consensus::ConsensusError;
use redistrict_survey::SurveyError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Plan file could not be read
    #[error("Failed to read plan file '{path}': {source}")]
    ReadPlans {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No plans in the selected source
    #[error("No plans to {0}")]
    NoPlans(&'static str),

    #[error("Survey error: {0}")]
    Survey(#[from] SurveyError),

    #[error("Consensus error: {0}")]
    Consensus(#[from] ConsensusError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
