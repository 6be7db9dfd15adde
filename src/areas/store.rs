//! Pluggable key/value storage
//!
//! The repository keeps all of its state in a [`Store`]: a set of named
//! collections mapping string keys to opaque byte values. Besides plain
//! reads and writes, a store must offer an atomic compare-and-swap, which is
//! what keeps branch heads and indexes consistent under concurrent commits.
//!
//! Values written by the repository are never empty.

use crate::error::Result;
use bytes::Bytes;
use tracing::debug;

/// Named key space inside a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    /// Version records by version id (append-only)
    Versions,
    /// Version ids of a project in commit order, by project id
    ProjectVersions,
    /// Branch records by branch id
    Branches,
    /// Current head of each branch, by branch id
    BranchHeads,
    /// Branch id claiming a (project, name) pair
    BranchNames,
    /// Branch ids of a project in creation order, by project id
    ProjectBranches,
    /// Default branch id, by project id
    DefaultBranches,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Versions,
        Collection::ProjectVersions,
        Collection::Branches,
        Collection::BranchHeads,
        Collection::BranchNames,
        Collection::ProjectBranches,
        Collection::DefaultBranches,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Versions => "versions",
            Collection::ProjectVersions => "project-versions",
            Collection::Branches => "branches",
            Collection::BranchHeads => "branch-heads",
            Collection::BranchNames => "branch-names",
            Collection::ProjectBranches => "project-branches",
            Collection::DefaultBranches => "default-branches",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub trait Store: std::fmt::Debug + Send + Sync {
    fn get(&self, collection: Collection, key: &str) -> anyhow::Result<Option<Bytes>>;

    fn put(&self, collection: Collection, key: &str, value: Bytes) -> anyhow::Result<()>;

    /// Remove a key, returning whether it existed
    fn remove(&self, collection: Collection, key: &str) -> anyhow::Result<bool>;

    /// Atomically replace the value of `key` with `value` if it currently
    /// equals `expected` (`None` meaning absent)
    ///
    /// Returns `false`, leaving the store untouched, when the current value
    /// differs.
    fn compare_and_swap(
        &self,
        collection: Collection,
        key: &str,
        expected: Option<&[u8]>,
        value: Bytes,
    ) -> anyhow::Result<bool>;

    fn keys(&self, collection: Collection) -> anyhow::Result<Vec<String>>;
}

/// Append `item` to the JSON string list stored under `key`
///
/// Retries the compare-and-swap until it wins. Lists only ever grow, so a
/// lost race always means some other append landed.
pub(crate) fn append_to_list(
    store: &dyn Store,
    collection: Collection,
    key: &str,
    item: &str,
) -> Result<()> {
    let mut attempt = 0usize;
    loop {
        attempt += 1;
        let current = store.get(collection, key)?;
        let mut items = match &current {
            Some(bytes) => serde_json::from_slice::<Vec<String>>(bytes)?,
            None => Vec::new(),
        };
        items.push(item.to_string());

        let updated = Bytes::from(serde_json::to_vec(&items)?);
        if store.compare_and_swap(collection, key, current.as_deref(), updated)? {
            return Ok(());
        }

        debug!(%collection, key, attempt, "list append lost a race, retrying");
    }
}

/// Read the JSON string list stored under `key`
pub(crate) fn read_list(
    store: &dyn Store,
    collection: Collection,
    key: &str,
) -> Result<Option<Vec<String>>> {
    match store.get(collection, key)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}
