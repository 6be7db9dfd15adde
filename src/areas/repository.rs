use crate::areas::database::Database;
use crate::areas::file_store::FileStore;
use crate::areas::memory_store::MemoryStore;
use crate::areas::refs::Refs;
use crate::areas::store::Store;
use crate::config::EngineConfig;
use crate::error::Result;
use std::path::Path;
use std::sync::Arc;

/// Version control engine over a [`Store`]
///
/// Cloning is cheap and clones share the same store, so a repository can be
/// handed to as many threads as needed.
#[derive(Debug, Clone)]
pub struct Repository {
    database: Database,
    refs: Refs,
    config: EngineConfig,
}

impl Repository {
    pub fn new(store: Arc<dyn Store>, config: EngineConfig) -> Self {
        Repository {
            database: Database::new(store.clone()),
            refs: Refs::new(store),
            config,
        }
    }

    pub fn in_memory(config: EngineConfig) -> Self {
        Self::new(Arc::new(MemoryStore::new()), config)
    }

    /// Open a repository persisted under `path`, creating it if needed
    pub fn open(path: impl AsRef<Path>, config: EngineConfig) -> Result<Self> {
        let store = FileStore::open(path)?;
        Ok(Self::new(Arc::new(store), config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub(crate) fn database(&self) -> &Database {
        &self.database
    }

    pub(crate) fn refs(&self) -> &Refs {
        &self.refs
    }
}
