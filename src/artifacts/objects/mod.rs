//! Stored object types
//!
//! - **Snapshot**: the complete design state, identified by a content hash
//! - **Version**: a snapshot plus lineage metadata (a commit)
//!
//! Every identifier is a SHA-1 [`ObjectId`](object_id::ObjectId).

pub mod object_id;
pub mod snapshot;
pub mod version;

use object_id::ObjectId;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
/// Length of an abbreviated object id
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;

/// Digest of a snapshot's content
pub type ContentHash = ObjectId;
/// Identity of a version
pub type VersionId = ObjectId;
/// Identity of a branch
pub type BranchId = ObjectId;
