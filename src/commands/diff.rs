use crate::areas::repository::Repository;
use crate::artifacts::diff::diff_filter::DiffFilter;
use crate::artifacts::diff::version_diff::{VersionDiff, diff_snapshots};
use crate::artifacts::objects::VersionId;
use crate::error::Result;

impl Repository {
    /// Path by path difference from `old_version_id` to `new_version_id`
    pub fn diff_versions(
        &self,
        old_version_id: &VersionId,
        new_version_id: &VersionId,
    ) -> Result<Vec<VersionDiff>> {
        let old_version = self.database().require_version(old_version_id)?;
        let new_version = self.database().require_version(new_version_id)?;

        Ok(diff_snapshots(
            &old_version.snapshot,
            &new_version.snapshot,
            self.config().diff_algorithm,
        ))
    }

    /// Like [`Repository::diff_versions`], keeping only the change kinds in `filter`
    pub fn diff_versions_filtered(
        &self,
        old_version_id: &VersionId,
        new_version_id: &VersionId,
        filter: DiffFilter,
    ) -> Result<Vec<VersionDiff>> {
        Ok(self
            .diff_versions(old_version_id, new_version_id)?
            .into_iter()
            .filter(|diff| diff.change.matches_filter(filter))
            .collect())
    }
}
