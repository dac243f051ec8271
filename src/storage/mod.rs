//! Storage layer for Ledgerbook
//!
//! The two root collections, entries and budget allocations, each live in a
//! repository that hands out immutable snapshots and persists through a
//! key-value `BlobStore`.

pub mod blob;
pub mod budget;
pub mod entries;
pub mod file_io;
pub mod snapshot;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore, BUDGETS_KEY, ENTRIES_KEY};
pub use budget::BudgetRepository;
pub use entries::EntryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use snapshot::Snapshot;

use std::sync::Arc;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    pub entries: EntryRepository,
    pub budget: BudgetRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Storage backed by JSON files in the data directory
    pub fn new(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;
        let mut storage = Self::with_store(Arc::new(FileBlobStore::new(paths.data_dir())));
        storage.audit = Some(AuditLogger::new(paths.audit_log()));
        Ok(storage)
    }

    /// Storage backed by an arbitrary blob store
    pub fn with_store(store: Arc<dyn BlobStore>) -> Self {
        Self {
            entries: EntryRepository::new(store.clone()),
            budget: BudgetRepository::new(store),
            audit: None,
        }
    }

    /// Attach an audit log to a storage built with `with_store`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Storage that lives only as long as the process
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryBlobStore::new()))
    }

    /// Load all data from the store
    pub fn load_all(&self) -> Result<(), LedgerError> {
        self.entries.load()?;
        self.budget.load()?;
        Ok(())
    }

    fn log(&self, record: AuditEntry) -> Result<(), LedgerError> {
        match &self.audit {
            Some(logger) => logger.log(&record),
            None => Ok(()),
        }
    }

    /// Audit the creation of an entity
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), LedgerError> {
        self.log(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Audit a change of value
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), LedgerError> {
        self.log(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Audit the removal of an entity
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), LedgerError> {
        self.log(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Audit a clear or import of a whole collection
    pub fn log_bulk(
        &self,
        operation: Operation,
        entity_type: EntityType,
        before_count: usize,
        after_count: usize,
    ) -> Result<(), LedgerError> {
        self.log(AuditEntry::bulk(operation, entity_type, before_count, after_count))
    }

    /// Save all data to the store
    pub fn save_all(&self) -> Result<(), LedgerError> {
        self.entries.save()?;
        self.budget.save()?;
        Ok(())
    }
}
