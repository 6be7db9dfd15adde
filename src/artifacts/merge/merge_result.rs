use crate::artifacts::merge::conflict::Conflict;
use crate::artifacts::objects::snapshot::DesignSnapshot;
use crate::artifacts::objects::version::DesignVersion;

/// Outcome of merging one branch into another
///
/// A conflicted merge is a normal outcome: nothing was committed and the
/// caller is expected to resolve the listed paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeResult {
    Merged {
        /// Merge commit appended to the target branch
        version: DesignVersion,
        snapshot: DesignSnapshot,
    },
    Conflicted { conflicts: Vec<Conflict> },
}

impl MergeResult {
    pub fn is_clean(&self) -> bool {
        matches!(self, MergeResult::Merged { .. })
    }

    pub fn conflicts(&self) -> &[Conflict] {
        match self {
            MergeResult::Merged { .. } => &[],
            MergeResult::Conflicted { conflicts } => conflicts,
        }
    }

    pub fn merged_snapshot(&self) -> Option<&DesignSnapshot> {
        match self {
            MergeResult::Merged { snapshot, .. } => Some(snapshot),
            MergeResult::Conflicted { .. } => None,
        }
    }

    pub fn merge_version(&self) -> Option<&DesignVersion> {
        match self {
            MergeResult::Merged { version, .. } => Some(version),
            MergeResult::Conflicted { .. } => None,
        }
    }
}
