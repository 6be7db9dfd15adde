use crate::areas::repository::Repository;
use crate::areas::store::Collection;
use crate::artifacts::objects::snapshot::DesignSnapshot;
use crate::artifacts::objects::version::DesignVersion;
use crate::artifacts::objects::{BranchId, VersionId};
use crate::error::{DesignVcsError, Result};
use tracing::{debug, info, warn};

/// Outcome of a single attempt at committing onto a branch head
pub(crate) enum CommitAttempt {
    Committed(DesignVersion),
    HeadMoved,
}

impl Repository {
    /// Commit `snapshot` onto the current head of `branch_id`
    ///
    /// On an unknown branch the version is recorded as a root version and no
    /// head is advanced. A branch of another project is rejected.
    pub fn create_version(
        &self,
        project_id: &str,
        branch_id: &BranchId,
        snapshot: DesignSnapshot,
        message: &str,
        author: &str,
    ) -> Result<DesignVersion> {
        let Some(branch) = self.refs().load_branch(branch_id)? else {
            let version =
                DesignVersion::new(project_id, branch_id, None, snapshot, message, author);
            self.database().store_version(&version)?;
            self.database().append_to_project(project_id, &version.id)?;

            warn!(%branch_id, version_id = %version.id, "committed onto unknown branch");
            return Ok(version);
        };
        branch.ensure_in_project(project_id)?;

        let max_attempts = self.config().max_commit_retries;
        for attempt in 1..=max_attempts {
            let parent = self
                .refs()
                .read_head(branch_id)?
                .flatten()
                .map(|head| self.database().require_version(&head))
                .transpose()?;

            match self.try_commit(
                project_id,
                branch_id,
                parent.as_ref(),
                snapshot.clone(),
                message,
                author,
            )? {
                CommitAttempt::Committed(version) => return Ok(version),
                CommitAttempt::HeadMoved => {
                    debug!(%branch_id, attempt, "branch head moved, rebuilding commit");
                }
            }
        }

        Err(DesignVcsError::ConcurrentUpdate {
            key: format!("{}/{}", Collection::BranchHeads, branch_id),
            attempts: max_attempts,
        })
    }

    pub fn get_version(&self, version_id: &VersionId) -> Result<DesignVersion> {
        self.database().require_version(version_id)
    }

    /// Every version of a project, newest first
    ///
    /// Versions with equal timestamps are ordered by commit order, later first.
    pub fn get_project_versions(&self, project_id: &str) -> Result<Vec<DesignVersion>> {
        let version_ids = self.database().project_version_ids(project_id)?;
        if version_ids.is_none() && self.refs().project_branch_ids(project_id)?.is_none() {
            return Err(DesignVcsError::not_found("project", project_id));
        }

        let mut versions = version_ids
            .unwrap_or_default()
            .iter()
            .map(|version_id| self.database().require_version(version_id))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>();
        versions.sort_by(|(a_order, a), (b_order, b)| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b_order.cmp(a_order))
        });

        Ok(versions.into_iter().map(|(_, version)| version).collect())
    }

    /// Stage a version on top of `parent`, then move the branch head to it
    ///
    /// The head must still point at `parent` for the commit to win. A staged
    /// version that loses the race is discarded. Once the head has moved only
    /// the project index append is left, and that append never gives up.
    pub(crate) fn try_commit(
        &self,
        project_id: &str,
        branch_id: &BranchId,
        parent: Option<&DesignVersion>,
        snapshot: DesignSnapshot,
        message: &str,
        author: &str,
    ) -> Result<CommitAttempt> {
        let version = DesignVersion::new(project_id, branch_id, parent, snapshot, message, author);
        self.database().store_version(&version)?;

        let expected_head = parent.map(|parent| &parent.id);
        if !self
            .refs()
            .advance_head(branch_id, expected_head, &version.id)?
        {
            self.database().discard_version(&version.id)?;
            warn!(%branch_id, version_id = %version.id, "lost branch head race");
            return Ok(CommitAttempt::HeadMoved);
        }

        self.database().append_to_project(project_id, &version.id)?;

        info!(
            %branch_id,
            version_id = %version.id,
            changed = version.metadata.changed_files.len(),
            "[{}{}] {}",
            if version.is_root() { "(root-commit) " } else { "" },
            version.id.to_short_oid(),
            version.short_message()
        );

        Ok(CommitAttempt::Committed(version))
    }
}
