//! Key-value blob stores
//!
//! The ledger persists two independently keyed JSON snapshots. A blob store
//! only moves bytes; decoding, and degrading bad bytes to empty data, is the
//! repositories' job.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};

use super::file_io::{read_bytes, write_bytes_atomic};

/// Storage key of the entry collection
pub const ENTRIES_KEY: &str = "entries";

/// Storage key of the budget map
pub const BUDGETS_KEY: &str = "budgets";

/// Durable byte storage addressed by key
pub trait BlobStore: Send + Sync {
    /// Bytes saved under `key`, or `None` if nothing was saved
    fn load(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Replace whatever is saved under `key`
    fn save(&self, key: &str, bytes: &[u8]) -> LedgerResult<()>;
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File backing a key (`<dir>/<key>.json`)
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn load(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        read_bytes(self.path_for(key))
    }

    fn save(&self, key: &str, bytes: &[u8]) -> LedgerResult<()> {
        write_bytes_atomic(self.path_for(key), bytes)
    }
}

/// Process-local store, used by tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key with raw bytes
    pub fn with_blob(self, key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut blobs) = self.blobs.write() {
            blobs.insert(key.to_string(), bytes.into());
        }
        self
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        let blobs = self
            .blobs
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(blobs.get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> LedgerResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        blobs.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Store that has nothing and refuses every write
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ReadOnlyBlobStore;

#[cfg(test)]
impl BlobStore for ReadOnlyBlobStore {
    fn load(&self, _key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(None)
    }

    fn save(&self, key: &str, _bytes: &[u8]) -> LedgerResult<()> {
        Err(LedgerError::Storage(format!("'{}' is read-only", key)))
    }
}
