//! Versioned copy-on-write snapshots
//!
//! Each root collection lives behind a `SnapshotCell`. Readers take a cheap
//! `Snapshot` (an `Arc` plus a version number) and keep a consistent view
//! for as long as they hold it; writers build the next value and swap it in
//! under the write lock, so a reader never observes a half-applied write.

use std::ops::Deref;
use std::sync::{Arc, RwLock};

use crate::error::{LedgerError, LedgerResult};

/// An immutable view of a collection at one version
#[derive(Debug)]
pub struct Snapshot<T> {
    version: u64,
    data: Arc<T>,
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            version: self.version,
            data: Arc::clone(&self.data),
        }
    }
}

impl<T> Snapshot<T> {
    /// Monotonic counter bumped by every write
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn data(&self) -> &T {
        &self.data
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

/// Holder of the current snapshot of one collection
#[derive(Debug)]
pub struct SnapshotCell<T> {
    current: RwLock<Snapshot<T>>,
}

impl<T: Clone> SnapshotCell<T> {
    pub fn new(data: T) -> Self {
        Self {
            current: RwLock::new(Snapshot {
                version: 0,
                data: Arc::new(data),
            }),
        }
    }

    /// The current snapshot
    pub fn read(&self) -> LedgerResult<Snapshot<T>> {
        let current = self
            .current
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(current.clone())
    }

    /// Install a new value wholesale
    pub fn replace(&self, data: T) -> LedgerResult<Snapshot<T>> {
        self.update(|current| *current = data).map(|(_, snap)| snap)
    }

    /// Apply a mutation to a private copy and publish it as the next version
    pub fn update<R>(&self, mutate: impl FnOnce(&mut T) -> R) -> LedgerResult<(R, Snapshot<T>)> {
        self.commit(mutate, |_| Ok(()))
    }

    /// Like [`SnapshotCell::update`], but hand the candidate to `persist`
    /// first and only publish it if that succeeds
    ///
    /// A failed persist leaves the current snapshot and version untouched.
    pub fn commit<R>(
        &self,
        mutate: impl FnOnce(&mut T) -> R,
        persist: impl FnOnce(&T) -> LedgerResult<()>,
    ) -> LedgerResult<(R, Snapshot<T>)> {
        let mut current = self
            .current
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut next = T::clone(&current.data);
        let result = mutate(&mut next);
        persist(&next)?;

        *current = Snapshot {
            version: current.version + 1,
            data: Arc::new(next),
        };
        Ok((result, current.clone()))
    }
}
