//! Domain types of the version control engine
//!
//! - `objects`: snapshots, versions and their identifiers
//! - `branch`: branch names and records
//! - `diff`: line and snapshot level differences
//! - `merge`: two-way merge and its outcome
//! - `log`: history walks along parent links

pub mod branch;
pub mod diff;
pub mod log;
pub mod merge;
pub mod objects;
