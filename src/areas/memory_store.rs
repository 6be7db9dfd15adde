use crate::areas::store::{Collection, Store};
use anyhow::anyhow;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::RwLock;

/// Volatile store backed by a lock-guarded hash map
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<(Collection, String), Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> anyhow::Error {
    anyhow!("memory store lock poisoned")
}

impl Store for MemoryStore {
    fn get(&self, collection: Collection, key: &str) -> anyhow::Result<Option<Bytes>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(&(collection, key.to_string())).cloned())
    }

    fn put(&self, collection: Collection, key: &str, value: Bytes) -> anyhow::Result<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert((collection, key.to_string()), value);
        Ok(())
    }

    fn remove(&self, collection: Collection, key: &str) -> anyhow::Result<bool> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        Ok(entries.remove(&(collection, key.to_string())).is_some())
    }

    fn compare_and_swap(
        &self,
        collection: Collection,
        key: &str,
        expected: Option<&[u8]>,
        value: Bytes,
    ) -> anyhow::Result<bool> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        let entry_key = (collection, key.to_string());

        if entries.get(&entry_key).map(|current| &current[..]) != expected {
            return Ok(false);
        }

        entries.insert(entry_key, value);
        Ok(true)
    }

    fn keys(&self, collection: Collection) -> anyhow::Result<Vec<String>> {
        let entries = self.entries.read().map_err(poisoned)?;
        let mut keys = entries
            .keys()
            .filter(|(entry_collection, _)| *entry_collection == collection)
            .map(|(_, key)| key.clone())
            .collect::<Vec<_>>();
        keys.sort();
        Ok(keys)
    }
}
