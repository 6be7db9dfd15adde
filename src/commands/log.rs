use crate::areas::repository::Repository;
use crate::artifacts::log::history::History;
use crate::artifacts::objects::VersionId;
use crate::artifacts::objects::version::DesignVersion;
use crate::error::Result;
use tracing::debug;

impl Repository {
    /// Ancestry of `version_id`, newest first and starting with the version itself
    ///
    /// Returns at most `limit` versions, or the configured history limit when
    /// none is given.
    pub fn get_version_history(
        &self,
        version_id: &VersionId,
        limit: Option<usize>,
    ) -> Result<Vec<DesignVersion>> {
        // an unknown start is an error even with a zero limit
        self.database().require_version(version_id)?;

        let limit = limit.unwrap_or(self.config().history_limit);
        let history = History::new(self.database(), version_id.clone())
            .walk(limit)
            .collect::<Result<Vec<_>>>()?;

        debug!(%version_id, limit, walked = history.len(), "walked version history");
        Ok(history)
    }
}
