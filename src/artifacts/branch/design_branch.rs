use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::{BranchId, VersionId};
use crate::error::{DesignVcsError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use fake::rand;
use serde::{Deserialize, Serialize};

const BRANCH_KIND: &str = "branch";

/// Named, movable pointer into a project's version tree
///
/// Only `head_version_id` ever changes after creation. `None` means the
/// branch has no commits yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignBranch {
    pub id: BranchId,
    pub project_id: String,
    pub name: BranchName,
    pub head_version_id: Option<VersionId>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub description: Option<String>,
    /// First branch created for the project
    pub is_default: bool,
}

impl DesignBranch {
    /// Fresh identifier for a branch of `project_id` called `name`
    pub fn generate_id(project_id: &str, name: &BranchName, created_at: DateTime<Utc>) -> BranchId {
        let header = [
            format!("project {project_id}"),
            format!("name {name}"),
            format!(
                "created {}",
                created_at.to_rfc3339_opts(SecondsFormat::Nanos, true)
            ),
            format!("nonce {}", rand::random::<u64>()),
        ];

        ObjectId::digest(BRANCH_KIND, header.join("\n").as_bytes())
    }

    pub fn has_commits(&self) -> bool {
        self.head_version_id.is_some()
    }

    pub fn ensure_in_project(&self, project_id: &str) -> Result<()> {
        if self.project_id != project_id {
            return Err(DesignVcsError::BranchNotInProject {
                branch_id: self.id.to_string(),
                project_id: project_id.to_string(),
            });
        }

        Ok(())
    }
}
