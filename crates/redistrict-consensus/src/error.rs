//! Error types for consensus construction.

use redistrict_grid::GridError;
use thiserror::Error;

/// Result type for consensus operations.
pub type Result<T> = std::result::Result<T, ConsensusError>;

/// Errors that stop a consensus from being built.
///
/// Running out of adjacent candidates while growing a district is not an
/// error; see [`Consensus::relaxed_districts`](crate::Consensus::relaxed_districts).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsensusError {
    /// Empty plan list, plans of differing shape, or a board that cannot be
    /// split by the district rules
    #[error("invalid consensus input: {0}")]
    Input(#[from] GridError),
}
