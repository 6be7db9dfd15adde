//! Branch registry
//!
//! A branch is split over several collections so that each mutable piece can
//! be claimed or advanced with a single compare-and-swap:
//!
//! - `branches`: immutable branch record (everything but the head)
//! - `branch-heads`: JSON `null` or `"<version id>"`, advanced by CAS
//! - `branch-names`: claims a `(project, name)` pair for one branch id
//! - `default-branches`: claims the default branch of a project
//! - `project-branches`: branch ids of a project in creation order

use crate::areas::store::{Collection, Store, append_to_list, read_list};
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::design_branch::DesignBranch;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::{BranchId, VersionId};
use crate::error::{DesignVcsError, Result};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BranchRecord {
    id: BranchId,
    project_id: String,
    name: BranchName,
    created_at: DateTime<Utc>,
    created_by: String,
    description: Option<String>,
    is_default: bool,
}

impl BranchRecord {
    fn into_branch(self, head_version_id: Option<VersionId>) -> DesignBranch {
        DesignBranch {
            id: self.id,
            project_id: self.project_id,
            name: self.name,
            head_version_id,
            created_at: self.created_at,
            created_by: self.created_by,
            description: self.description,
            is_default: self.is_default,
        }
    }
}

#[derive(Debug, Clone, new)]
pub struct Refs {
    store: Arc<dyn Store>,
}

impl Refs {
    /// Register a new branch of `project_id` pointing at `head`
    ///
    /// The name is claimed first, so a duplicate leaves no trace behind. The
    /// first branch to claim the project's default slot is the default one.
    /// The head is written before the record, so a loadable branch always has
    /// a head. If a later write fails, both claims are released again.
    pub fn create_branch(
        &self,
        project_id: &str,
        name: BranchName,
        head: Option<VersionId>,
        created_by: &str,
        description: Option<String>,
    ) -> Result<DesignBranch> {
        let created_at = Utc::now();
        let id = DesignBranch::generate_id(project_id, &name, created_at);
        let id_value = Bytes::from(serde_json::to_vec(&id)?);

        let name_key = Self::name_key(project_id, &name)?;
        if !self
            .store
            .compare_and_swap(Collection::BranchNames, &name_key, None, id_value.clone())?
        {
            return Err(DesignVcsError::BranchExists {
                project_id: project_id.to_string(),
                name: name.to_string(),
            });
        }

        let record = self
            .store
            .compare_and_swap(Collection::DefaultBranches, project_id, None, id_value)
            .map_err(DesignVcsError::from)
            .and_then(|is_default| {
                debug!(%id, project_id, is_default, "claimed branch name");
                let record = BranchRecord {
                    id: id.clone(),
                    project_id: project_id.to_string(),
                    name,
                    created_at,
                    created_by: created_by.to_string(),
                    description,
                    is_default,
                };
                self.register(&record, head.as_ref())?;
                Ok(record)
            });

        match record {
            Ok(record) => Ok(record.into_branch(head)),
            Err(error) => {
                self.release_claims(project_id, &id, &name_key);
                Err(error)
            }
        }
    }

    /// Load a branch together with its current head
    pub fn load_branch(&self, branch_id: &BranchId) -> Result<Option<DesignBranch>> {
        let Some(content) = self.store.get(Collection::Branches, branch_id.as_ref())? else {
            return Ok(None);
        };
        let record = serde_json::from_slice::<BranchRecord>(&content)?;
        let head = self.read_head(branch_id)?.flatten();

        Ok(Some(record.into_branch(head)))
    }

    /// Current head of a branch
    ///
    /// The outer `None` means the branch is unknown, the inner one that it has
    /// no commits yet.
    pub fn read_head(&self, branch_id: &BranchId) -> Result<Option<Option<VersionId>>> {
        match self.store.get(Collection::BranchHeads, branch_id.as_ref())? {
            Some(content) => Ok(Some(serde_json::from_slice(&content)?)),
            None => Ok(None),
        }
    }

    /// Move a branch head from `expected` to `new_head`
    ///
    /// Returns `false` without touching the head if it no longer equals `expected`.
    pub fn advance_head(
        &self,
        branch_id: &BranchId,
        expected: Option<&VersionId>,
        new_head: &VersionId,
    ) -> Result<bool> {
        let expected = Self::encode_head(expected)?;
        let advanced = self.store.compare_and_swap(
            Collection::BranchHeads,
            branch_id.as_ref(),
            Some(&expected[..]),
            Self::encode_head(Some(new_head))?,
        )?;

        Ok(advanced)
    }

    /// Branch ids of a project in creation order, `None` if it has no branch
    pub fn project_branch_ids(&self, project_id: &str) -> Result<Option<Vec<BranchId>>> {
        read_list(self.store.as_ref(), Collection::ProjectBranches, project_id)?
            .map(|ids| ids.into_iter().map(ObjectId::try_parse).collect())
            .transpose()
    }

    fn register(&self, record: &BranchRecord, head: Option<&VersionId>) -> Result<()> {
        self.store.put(
            Collection::BranchHeads,
            record.id.as_ref(),
            Self::encode_head(head)?,
        )?;
        self.store.put(
            Collection::Branches,
            record.id.as_ref(),
            Bytes::from(serde_json::to_vec(record)?),
        )?;
        append_to_list(
            self.store.as_ref(),
            Collection::ProjectBranches,
            &record.project_id,
            record.id.as_ref(),
        )
    }

    /// Undo a half-registered branch so that its name can be taken again
    fn release_claims(&self, project_id: &str, branch_id: &BranchId, name_key: &str) {
        let owned_default = self
            .store
            .get(Collection::DefaultBranches, project_id)
            .ok()
            .flatten()
            .and_then(|owner| serde_json::from_slice::<BranchId>(&owner).ok())
            .is_some_and(|owner| &owner == branch_id);

        let released = [
            (Collection::Branches, branch_id.as_ref()),
            (Collection::BranchHeads, branch_id.as_ref()),
            (Collection::BranchNames, name_key),
        ]
        .into_iter()
        .chain(owned_default.then_some((Collection::DefaultBranches, project_id)))
        .map(|(collection, key)| self.store.remove(collection, key))
        .collect::<anyhow::Result<Vec<_>>>();

        if let Err(error) = released {
            warn!(%branch_id, project_id, "unable to release branch claims: {error:#}");
        }
    }

    fn name_key(project_id: &str, name: &BranchName) -> Result<String> {
        Ok(serde_json::to_string(&(project_id, name.as_ref()))?)
    }

    fn encode_head(head: Option<&VersionId>) -> Result<Bytes> {
        Ok(Bytes::from(serde_json::to_vec(&head)?))
    }
}
