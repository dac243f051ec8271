//! Entry repository
//!
//! Owns the in-memory entry collection (insertion order preserved) and its
//! persisted snapshot under the `entries` key. Every mutation is written to
//! the store before it becomes visible to readers.

use std::sync::Arc;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Entry, EntryId};

use super::blob::{BlobStore, ENTRIES_KEY};
use super::snapshot::{Snapshot, SnapshotCell};

/// Repository for the entry collection
pub struct EntryRepository {
    store: Arc<dyn BlobStore>,
    entries: SnapshotCell<Vec<Entry>>,
}

impl EntryRepository {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            entries: SnapshotCell::new(Vec::new()),
        }
    }

    /// Load entries from the store
    ///
    /// Absent, unreadable or malformed data loads as an empty collection.
    pub fn load(&self) -> LedgerResult<()> {
        let entries = match self.store.load(ENTRIES_KEY) {
            Ok(Some(bytes)) => serde_json::from_slice::<Vec<Entry>>(&bytes).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored entries are malformed, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored entries, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(count = entries.len(), "loaded entries");
        self.entries.replace(entries)?;
        Ok(())
    }

    /// Persist the current snapshot
    pub fn save(&self) -> LedgerResult<()> {
        let snapshot = self.entries.read()?;
        self.persist(snapshot.data())?;
        tracing::debug!(count = snapshot.len(), version = snapshot.version(), "saved entries");
        Ok(())
    }

    fn persist(&self, entries: &[Entry]) -> LedgerResult<()> {
        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| LedgerError::Storage(format!("Failed to serialize entries: {}", e)))?;
        self.store.save(ENTRIES_KEY, &bytes)
    }

    fn commit<R>(&self, mutate: impl FnOnce(&mut Vec<Entry>) -> R) -> LedgerResult<R> {
        let (result, snapshot) = self.entries.commit(mutate, |next| self.persist(next))?;
        tracing::debug!(count = snapshot.len(), version = snapshot.version(), "saved entries");
        Ok(result)
    }

    /// The current collection
    pub fn snapshot(&self) -> LedgerResult<Snapshot<Vec<Entry>>> {
        self.entries.read()
    }

    pub fn append(&self, entry: Entry) -> LedgerResult<()> {
        self.commit(|entries| entries.push(entry))
    }

    /// Remove an entry by ID, returning it if it existed
    pub fn remove(&self, id: EntryId) -> LedgerResult<Option<Entry>> {
        self.commit(|entries| {
            entries
                .iter()
                .position(|e| e.id == id)
                .map(|idx| entries.remove(idx))
        })
    }

    /// Remove every entry, returning how many were dropped
    pub fn clear(&self) -> LedgerResult<usize> {
        self.commit(|entries| {
            let count = entries.len();
            entries.clear();
            count
        })
    }

    /// Replace the whole collection
    pub fn replace_all(&self, entries: Vec<Entry>) -> LedgerResult<()> {
        self.commit(|current| *current = entries)
    }

    /// Entries whose ID matches a full or shortened reference
    pub fn find(&self, reference: &str) -> LedgerResult<Vec<Entry>> {
        let snapshot = self.entries.read()?;
        Ok(snapshot
            .iter()
            .filter(|e| e.id.matches(reference))
            .cloned()
            .collect())
    }

    pub fn count(&self) -> LedgerResult<usize> {
        Ok(self.entries.read()?.len())
    }
}
