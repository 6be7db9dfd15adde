//! Repository operations
//!
//! Each module adds one group of methods to
//! [`Repository`](crate::areas::repository::Repository):
//!
//! - `commit`: create and read versions
//! - `branch`: create and read branches
//! - `log`: version history
//! - `diff`: compare two versions
//! - `merge`: merge one branch into another
//! - `rollback`: recommit an earlier snapshot
//! - `preview`: renderable page of a version
//! - `export`: JSON dump of a project's history

pub mod branch;
pub mod commit;
pub mod diff;
pub mod export;
pub mod log;
pub mod merge;
pub mod preview;
pub mod rollback;
