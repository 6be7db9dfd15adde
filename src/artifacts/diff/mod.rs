//! Diff algorithms and snapshot comparison
//!
//! - `diff_filter`: bitflag selection of reported change kinds
//! - `line_diff`: line-by-line comparison (heuristic walk or Myers)
//! - `version_diff`: path-level comparison of two snapshots
//!
//! Snapshot comparison reports which files changed; line diffs are computed
//! only for files modified on both sides.

pub mod diff_filter;
pub mod line_diff;
pub mod version_diff;
