use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::design_branch::DesignBranch;
use crate::artifacts::objects::{BranchId, VersionId};
use crate::error::{DesignVcsError, Result};
use tracing::info;

impl Repository {
    /// Create a branch of `project_id`, optionally starting at `from_version_id`
    pub fn create_branch(
        &self,
        project_id: &str,
        name: &str,
        from_version_id: Option<&VersionId>,
        created_by: &str,
        description: Option<&str>,
    ) -> Result<DesignBranch> {
        let name = BranchName::try_parse(name)?;

        if let Some(from_version_id) = from_version_id {
            self.database().require_version(from_version_id)?;
        }

        let branch = self.refs().create_branch(
            project_id,
            name,
            from_version_id.cloned(),
            created_by,
            description.map(str::to_string),
        )?;

        info!(
            branch_id = %branch.id,
            project_id,
            is_default = branch.is_default,
            "created branch '{}'",
            branch.name
        );

        Ok(branch)
    }

    pub fn get_branch(&self, branch_id: &BranchId) -> Result<DesignBranch> {
        self.refs()
            .load_branch(branch_id)?
            .ok_or_else(|| DesignVcsError::not_found("branch", branch_id))
    }

    /// Branches of a project in creation order
    pub fn get_project_branches(&self, project_id: &str) -> Result<Vec<DesignBranch>> {
        let branch_ids = self.refs().project_branch_ids(project_id)?;
        if branch_ids.is_none() && self.database().project_version_ids(project_id)?.is_none() {
            return Err(DesignVcsError::not_found("project", project_id));
        }

        branch_ids
            .unwrap_or_default()
            .iter()
            .map(|branch_id| self.get_branch(branch_id))
            .collect()
    }
}
