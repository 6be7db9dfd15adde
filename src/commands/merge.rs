use crate::areas::repository::Repository;
use crate::areas::store::Collection;
use crate::artifacts::merge::merge_result::MergeResult;
use crate::artifacts::merge::two_way_merge::merge_snapshots;
use crate::artifacts::objects::BranchId;
use crate::commands::commit::CommitAttempt;
use crate::error::{DesignVcsError, Result};
use tracing::{debug, info};

impl Repository {
    /// Merge the head of `source_branch_id` into `target_branch_id`
    ///
    /// A clean merge is committed onto the target with the target's previous
    /// head as its only parent. A conflicted merge commits nothing. Both
    /// branches must belong to the same project.
    pub fn merge_branches(
        &self,
        source_branch_id: &BranchId,
        target_branch_id: &BranchId,
        author: &str,
    ) -> Result<MergeResult> {
        let source = self.get_branch(source_branch_id)?;
        let target = self.get_branch(target_branch_id)?;
        source.ensure_in_project(&target.project_id)?;

        let source_head = source
            .head_version_id
            .as_ref()
            .ok_or_else(|| DesignVcsError::not_found("branch head", source_branch_id))?;
        let source_version = self.database().require_version(source_head)?;

        let message = format!("Merge branch '{}' into '{}'", source.name, target.name);
        let max_attempts = self.config().max_commit_retries;

        for attempt in 1..=max_attempts {
            // re-read the target head on every attempt, a lost race means it moved
            let target_head = self
                .refs()
                .read_head(target_branch_id)?
                .flatten()
                .ok_or_else(|| DesignVcsError::not_found("branch head", target_branch_id))?;
            let target_version = self.database().require_version(&target_head)?;

            let snapshot = match merge_snapshots(&source_version.snapshot, &target_version.snapshot)
            {
                Ok(snapshot) => snapshot,
                Err(conflicts) => {
                    info!(
                        source = %source.name,
                        target = %target.name,
                        conflicts = conflicts.len(),
                        "merge stopped on conflicts"
                    );
                    return Ok(MergeResult::Conflicted { conflicts });
                }
            };

            match self.try_commit(
                &target.project_id,
                target_branch_id,
                Some(&target_version),
                snapshot.clone(),
                &message,
                author,
            )? {
                CommitAttempt::Committed(version) => {
                    info!(version_id = %version.id, "{message}");
                    return Ok(MergeResult::Merged { version, snapshot });
                }
                CommitAttempt::HeadMoved => {
                    debug!(%target_branch_id, attempt, "target head moved, recomputing merge");
                }
            }
        }

        Err(DesignVcsError::ConcurrentUpdate {
            key: format!("{}/{}", Collection::BranchHeads, target_branch_id),
            attempts: max_attempts,
        })
    }
}
