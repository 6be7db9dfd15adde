//! Durable store on the local file system
//!
//! ## Layout
//!
//! ```text
//! <root>/<collection>/<key digest>        zlib-compressed entry
//! <root>/<collection>/<key digest>.lock   advisory lock for writers
//! ```
//!
//! File names are the 40-hex digest of the key, so any key length fits. An
//! entry starts with a `key <size>\0<key>` header followed by the value.
//!
//! Values are written to a temporary file and renamed into place, so readers
//! never observe a partial value and never need a lock. Writers to the same
//! key serialize on the key's lock file (across processes) and on a mutex
//! (across threads of this process, since record locks are per process).

use crate::areas::store::{Collection, Store};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::{Context, anyhow};
use bytes::Bytes;
use fake::rand;
use file_guard::Lock;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use walkdir::WalkDir;

const LOCK_SUFFIX: &str = ".lock";
const TEMP_PREFIX: &str = "tmp-obj-";
const KEY_KIND: &str = "key";

#[derive(Debug)]
pub struct FileStore {
    path: Box<Path>,
    writers: Mutex<()>,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `path`
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        for collection in Collection::ALL {
            let collection_path = path.join(collection.as_str());
            std::fs::create_dir_all(&collection_path).with_context(|| {
                format!(
                    "Unable to create collection directory {}",
                    collection_path.display()
                )
            })?;
        }

        Ok(FileStore {
            path: path.to_path_buf().into_boxed_path(),
            writers: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn entry_path(&self, collection: Collection, key: &str) -> PathBuf {
        self.path
            .join(collection.as_str())
            .join(ObjectId::digest(KEY_KIND, key.as_bytes()).to_string())
    }

    /// Run `update` while holding both the process-local and the file lock of `entry_path`
    fn with_lock<T>(
        &self,
        entry_path: &Path,
        update: impl FnOnce() -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let _writers = self
            .writers
            .lock()
            .map_err(|_| anyhow!("file store writer lock poisoned"))?;

        let lock_path = lock_path(entry_path)?;
        let mut lock_file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Unable to open lock file {}", lock_path.display()))?;
        let _lock = file_guard::lock(&mut lock_file, Lock::Exclusive, 0, 1)
            .with_context(|| format!("Unable to lock {}", lock_path.display()))?;

        update()
    }

    fn read_entry(&self, entry_path: &Path) -> anyhow::Result<Option<(String, Bytes)>> {
        let content = match std::fs::read(entry_path) {
            Ok(content) => content,
            // removed entries vanish between listing and reading
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(error).with_context(|| {
                    format!("Unable to read entry file {}", entry_path.display())
                });
            }
        };
        if content.is_empty() {
            return Ok(None);
        }

        decode_entry(decompress(content.into())?).map(Some)
    }

    /// Value of `key`, checking that the entry really belongs to it
    fn read_value(&self, entry_path: &Path, key: &str) -> anyhow::Result<Option<Bytes>> {
        match self.read_entry(entry_path)? {
            Some((stored_key, value)) if stored_key == key => Ok(Some(value)),
            Some((stored_key, _)) => Err(anyhow!(
                "Entry file {} holds key {stored_key:?} instead of {key:?}",
                entry_path.display()
            )),
            None => Ok(None),
        }
    }

    fn write_entry(&self, entry_path: &Path, key: &str, value: Bytes) -> anyhow::Result<()> {
        let entry_dir = entry_path
            .parent()
            .with_context(|| format!("Invalid entry path {}", entry_path.display()))?;
        let temp_path = entry_dir.join(generate_temp_name());

        let content = compress(encode_entry(key, &value))?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Unable to open entry file {}", temp_path.display()))?;
        file.write_all(&content)
            .with_context(|| format!("Unable to write entry file {}", temp_path.display()))?;
        file.sync_all()
            .with_context(|| format!("Unable to flush entry file {}", temp_path.display()))?;

        // rename the temp file over the entry to make the write atomic
        std::fs::rename(&temp_path, entry_path).with_context(|| {
            format!("Unable to rename entry file to {}", entry_path.display())
        })?;

        Ok(())
    }
}

impl Store for FileStore {
    fn get(&self, collection: Collection, key: &str) -> anyhow::Result<Option<Bytes>> {
        self.read_value(&self.entry_path(collection, key), key)
    }

    fn put(&self, collection: Collection, key: &str, value: Bytes) -> anyhow::Result<()> {
        let entry_path = self.entry_path(collection, key);
        self.with_lock(&entry_path, || self.write_entry(&entry_path, key, value))
    }

    fn remove(&self, collection: Collection, key: &str) -> anyhow::Result<bool> {
        let entry_path = self.entry_path(collection, key);
        self.with_lock(&entry_path, || {
            if !entry_path.exists() {
                return Ok(false);
            }

            std::fs::remove_file(&entry_path).with_context(|| {
                format!("Unable to remove entry file {}", entry_path.display())
            })?;
            Ok(true)
        })
    }

    fn compare_and_swap(
        &self,
        collection: Collection,
        key: &str,
        expected: Option<&[u8]>,
        value: Bytes,
    ) -> anyhow::Result<bool> {
        let entry_path = self.entry_path(collection, key);
        self.with_lock(&entry_path, || {
            let current = self.read_value(&entry_path, key)?;
            if current.as_deref() != expected {
                return Ok(false);
            }

            self.write_entry(&entry_path, key, value)?;
            Ok(true)
        })
    }

    fn keys(&self, collection: Collection) -> anyhow::Result<Vec<String>> {
        let collection_path = self.path.join(collection.as_str());

        let mut keys = WalkDir::new(&collection_path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file() && is_entry_name(entry.file_name()))
            .map(|entry| self.read_entry(entry.path()))
            .filter_map(|entry| entry.transpose())
            .map(|entry| entry.map(|(key, _)| key))
            .collect::<anyhow::Result<Vec<_>>>()?;

        keys.sort();
        Ok(keys)
    }
}

fn lock_path(entry_path: &Path) -> anyhow::Result<PathBuf> {
    let file_name = entry_path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid entry path {}", entry_path.display()))?;

    Ok(entry_path.with_file_name(format!("{file_name}{LOCK_SUFFIX}")))
}

/// Entry files are named by a 40-hex digest, anything else is skipped
fn is_entry_name(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|name| {
        name.len() == 40 && name.bytes().all(|byte| byte.is_ascii_hexdigit())
    })
}

fn encode_entry(key: &str, value: &[u8]) -> Bytes {
    let header = format!("{KEY_KIND} {}\0", key.len());

    let mut content = Vec::with_capacity(header.len() + key.len() + value.len());
    content.extend_from_slice(header.as_bytes());
    content.extend_from_slice(key.as_bytes());
    content.extend_from_slice(value);
    content.into()
}

fn decode_entry(content: Bytes) -> anyhow::Result<(String, Bytes)> {
    let header_end = content
        .iter()
        .position(|&byte| byte == 0)
        .context("Entry is missing its key header")?;
    let key_size = std::str::from_utf8(&content[..header_end])
        .ok()
        .and_then(|header| header.strip_prefix(KEY_KIND)?.strip_prefix(' '))
        .and_then(|size| size.parse::<usize>().ok())
        .context("Entry has a malformed key header")?;

    let key_end = header_end + 1 + key_size;
    if content.len() < key_end {
        anyhow::bail!("Entry is shorter than its key header claims");
    }
    let key = std::str::from_utf8(&content[header_end + 1..key_end])
        .context("Entry key is not valid UTF-8")?
        .to_string();

    Ok((key, content.slice(key_end..)))
}

fn compress(data: Bytes) -> anyhow::Result<Bytes> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(&data)
        .context("Unable to compress entry content")?;

    encoder
        .finish()
        .map(|compressed_content| compressed_content.into())
        .context("Unable to finish compressing entry content")
}

fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
    let mut decoder = flate2::read::ZlibDecoder::new(&*data);
    let mut decompressed_content = Vec::new();
    decoder
        .read_to_end(&mut decompressed_content)
        .context("Unable to decompress entry content")?;

    Ok(decompressed_content.into())
}

fn generate_temp_name() -> String {
    format!("{TEMP_PREFIX}{}", rand::random::<u32>())
}
