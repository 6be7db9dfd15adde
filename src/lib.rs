//! Version control for generated website designs
//!
//! Every design snapshot (markup, styles, scripts, assets, configuration) is
//! recorded as an immutable, content-hashed version in a per-project commit
//! tree. Branches are movable head pointers advanced by compare-and-swap.
//!
//! - `areas`: storage backends and the `Repository` facade
//! - `artifacts`: snapshot, version, branch, diff, merge and history types
//! - `commands`: the operations exposed on `Repository`
//!
//! ```rust,ignore
//! let repository = Repository::in_memory(EngineConfig::default());
//! let main = repository.create_branch("site", "main", None, "ci", None)?;
//! let v1 = repository.create_version("site", &main.id, snapshot, "initial", "ci")?;
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod error;

pub use areas::file_store::FileStore;
pub use areas::memory_store::MemoryStore;
pub use areas::repository::Repository;
pub use areas::store::{Collection, Store};
pub use artifacts::branch::branch_name::BranchName;
pub use artifacts::branch::design_branch::DesignBranch;
pub use artifacts::diff::diff_filter::DiffFilter;
pub use artifacts::diff::line_diff::{DiffAlgorithm, LineChange, LineChangeKind};
pub use artifacts::diff::version_diff::{FileChange, VersionDiff};
pub use artifacts::merge::conflict::Conflict;
pub use artifacts::merge::merge_result::MergeResult;
pub use artifacts::objects::object_id::ObjectId;
pub use artifacts::objects::snapshot::DesignSnapshot;
pub use artifacts::objects::version::{DesignVersion, VersionMetadata};
pub use commands::export::{ExportedVersion, VersionHistoryExport};
pub use config::EngineConfig;
pub use error::{DesignVcsError, Result};
