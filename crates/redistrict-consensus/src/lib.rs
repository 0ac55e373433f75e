//! Consensus Districting
//!
//! Derives one representative districting from many independently drawn
//! plans.
//!
//! # Core Insight
//!
//! Labels are not comparable across plans: one plan's district 0 may be
//! another plan's district 3. Majority voting on raw labels is meaningless.
//! What *is* comparable is whether two cells end up together, so the
//! consensus is built from pairwise co-occurrence, which ignores label
//! values entirely.
//!
//! # Construction
//!
//! 1. **Co-occurrence**: for every pair of cells, the fraction of plans
//!    placing them in the same district
//! 2. **Greedy growth**: seeds in row-major order, each district grown
//!    through adjacent cells with the highest mean affinity to its members
//!
//! The result always has `D` districts of `K` cells. Districts are
//! contiguous unless growth ran out of adjacent cells, in which case the
//! district is reported in [`Consensus::relaxed_districts`].
//!
//! # Example
//!
//! ```
//! use redistrict_consensus::ConsensusBuilder;
//! use redistrict_grid::Grid;
//!
//! let rows = Grid::from_rows([[0, 0, 0, 0, 0], [1, 1, 1, 1, 1], [2, 2, 2, 2, 2], [3, 3, 3, 3, 3], [4, 4, 4, 4, 4]])?;
//! let consensus = ConsensusBuilder::new().build(&[rows.clone(), rows.clone()])?;
//! assert_eq!(consensus.grid(), &rows);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod cooccurrence;
mod error;

pub use builder::{build_consensus, Consensus, ConsensusBuilder};
pub use cooccurrence::CoOccurrence;
pub use error::{ConsensusError, Result};
