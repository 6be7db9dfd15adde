use crate::areas::repository::Repository;
use crate::artifacts::branch::design_branch::DesignBranch;
use crate::artifacts::objects::version::{DesignVersion, VersionMetadata};
use crate::artifacts::objects::{BranchId, ContentHash, VersionId};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// History of a project without snapshot bodies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionHistoryExport {
    pub project_id: String,
    pub exported_at: DateTime<Utc>,
    pub branches: Vec<DesignBranch>,
    pub versions: Vec<ExportedVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedVersion {
    pub id: VersionId,
    pub hash: ContentHash,
    pub message: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub parent_id: Option<VersionId>,
    pub branch_id: BranchId,
    pub metadata: VersionMetadata,
}

impl From<DesignVersion> for ExportedVersion {
    fn from(version: DesignVersion) -> Self {
        ExportedVersion {
            id: version.id,
            hash: version.hash,
            message: version.message,
            author: version.author,
            timestamp: version.timestamp,
            parent_id: version.parent_id,
            branch_id: version.branch_id,
            metadata: version.metadata,
        }
    }
}

impl Repository {
    pub fn export_history(&self, project_id: &str) -> Result<VersionHistoryExport> {
        let branches = self.get_project_branches(project_id)?;
        let versions = self
            .get_project_versions(project_id)?
            .into_iter()
            .map(ExportedVersion::from)
            .collect();

        Ok(VersionHistoryExport {
            project_id: project_id.to_string(),
            exported_at: Utc::now(),
            branches,
            versions,
        })
    }

    /// Pretty-printed JSON of [`Repository::export_history`]
    pub fn export_version_history(&self, project_id: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(
            &self.export_history(project_id)?,
        )?)
    }
}
