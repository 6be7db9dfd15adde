use crate::areas::store::{Collection, Store, append_to_list, read_list};
use crate::artifacts::objects::VersionId;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::version::DesignVersion;
use crate::error::{DesignVcsError, Result};
use bytes::Bytes;
use derive_new::new;
use std::sync::Arc;

/// Version records, keyed by version id, and the commit-ordered version
/// index of every project
#[derive(Debug, Clone, new)]
pub struct Database {
    store: Arc<dyn Store>,
}

impl Database {
    pub fn store_version(&self, version: &DesignVersion) -> Result<()> {
        let content = Bytes::from(serde_json::to_vec(version)?);
        self.store
            .put(Collection::Versions, version.id.as_ref(), content)?;

        Ok(())
    }

    /// Drop a staged version that never became reachable from a branch head
    pub fn discard_version(&self, version_id: &VersionId) -> Result<()> {
        self.store.remove(Collection::Versions, version_id.as_ref())?;
        Ok(())
    }

    pub fn load_version(&self, version_id: &VersionId) -> Result<Option<DesignVersion>> {
        match self.store.get(Collection::Versions, version_id.as_ref())? {
            Some(content) => Ok(Some(serde_json::from_slice(&content)?)),
            None => Ok(None),
        }
    }

    /// Like [`Database::load_version`], but a missing version is an error
    pub fn require_version(&self, version_id: &VersionId) -> Result<DesignVersion> {
        self.load_version(version_id)?
            .ok_or_else(|| DesignVcsError::not_found("version", version_id))
    }

    pub fn append_to_project(&self, project_id: &str, version_id: &VersionId) -> Result<()> {
        append_to_list(
            self.store.as_ref(),
            Collection::ProjectVersions,
            project_id,
            version_id.as_ref(),
        )
    }

    /// Version ids of a project in commit order, `None` if it never had a commit
    pub fn project_version_ids(&self, project_id: &str) -> Result<Option<Vec<VersionId>>> {
        read_list(self.store.as_ref(), Collection::ProjectVersions, project_id)?
            .map(|ids| ids.into_iter().map(ObjectId::try_parse).collect())
            .transpose()
    }
}
