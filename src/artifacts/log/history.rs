use crate::areas::database::Database;
use crate::artifacts::objects::VersionId;
use crate::artifacts::objects::version::DesignVersion;
use crate::error::Result;
use derive_new::new;

/// Walk of a version's ancestry along parent links, newest first
#[derive(Clone, new)]
pub(crate) struct History<'r> {
    database: &'r Database,
    start_version_id: VersionId,
}

impl<'r> History<'r> {
    /// Iterate at most `limit` versions, starting with the start version itself
    pub fn walk(self, limit: usize) -> HistoryIntoIter<'r> {
        HistoryIntoIter {
            database: self.database,
            current_version_id: Some(self.start_version_id),
            remaining: limit,
        }
    }
}

#[derive(Clone)]
pub(crate) struct HistoryIntoIter<'r> {
    database: &'r Database,
    current_version_id: Option<VersionId>,
    remaining: usize,
}

impl Iterator for HistoryIntoIter<'_> {
    type Item = Result<DesignVersion>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let version_id = self.current_version_id.take()?;

        match self.database.require_version(&version_id) {
            Ok(version) => {
                self.remaining -= 1;
                // move to the parent for the next iteration
                self.current_version_id = version.parent_id.clone();
                Some(Ok(version))
            }
            Err(error) => Some(Err(error)),
        }
    }
}
