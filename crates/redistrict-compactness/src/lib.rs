//! Compactness Scoring
//!
//! Quantifies how compact, as opposed to sprawling, each district of a
//! labeled grid is, and how fragmented the grid's boundaries are.
//!
//! - **Cut edges**: adjacent cell pairs whose labels differ
//! - **Polsby–Popper**: `4π·area/perimeter²` per district
//! - **Average score**: unweighted mean Polsby–Popper, used for ranking
//!
//! Scoring depends only on label equality, so relabeling a grid never changes
//! its cut edges or its multiset of district scores.
//!
//! # Example
//!
//! ```
//! use redistrict_compactness::score;
//! use redistrict_grid::Grid;
//!
//! let stripes = Grid::from_rows([
//!     [0, 0, 0, 0, 0],
//!     [1, 1, 1, 1, 1],
//!     [2, 2, 2, 2, 2],
//!     [3, 3, 3, 3, 3],
//!     [4, 4, 4, 4, 4],
//! ])?;
//! let report = score(&stripes);
//! assert_eq!(report.cut_edges, 20);
//! assert_eq!(report.districts[0].perimeter, 12);
//! # Ok::<(), redistrict_grid::GridError>(())
//! ```

mod metrics;
mod ranking;

pub use metrics::{cut_edges, polsby_popper, score, CompactnessReport, DistrictMetrics};
pub use ranking::{compare_compactness, rank_by_compactness, rank_scored, PlanScore, RankedPlan};
