use crate::areas::repository::Repository;
use crate::artifacts::objects::version::DesignVersion;
use crate::artifacts::objects::{BranchId, VersionId};
use crate::error::Result;
use tracing::info;

impl Repository {
    /// Commit the snapshot of `target_version_id` again on top of `branch_id`
    ///
    /// History is never rewritten: the rollback is a new version whose
    /// content hash equals the target's.
    pub fn rollback(
        &self,
        project_id: &str,
        branch_id: &BranchId,
        target_version_id: &VersionId,
        author: &str,
    ) -> Result<DesignVersion> {
        let target = self.database().require_version(target_version_id)?;
        let message = format!("Rollback to {}", target.hash);

        let version =
            self.create_version(project_id, branch_id, target.snapshot, &message, author)?;

        info!(%branch_id, target = %target.id, version_id = %version.id, "rolled back");
        Ok(version)
    }
}
