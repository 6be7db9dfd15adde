//! Two-way merge of branch heads
//!
//! - `conflict`: a path edited differently on both sides
//! - `merge_result`: outcome returned to callers
//! - `two_way_merge`: snapshot merge without a common ancestor
//!
//! Only the two heads are compared. Any markup path present on both sides
//! with different content is a conflict, even when only one side edited it.

pub mod conflict;
pub mod merge_result;
pub mod two_way_merge;
