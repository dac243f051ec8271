//! Ledger shell
//!
//! Opens storage for a base directory, loads both collections and hands out
//! services for mutations and `LedgerView`s for reports.

use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;
use crate::models::Taxonomy;
use crate::reports::LedgerView;
use crate::storage::Storage;

use super::{BudgetService, EntryService};

/// An opened ledger
pub struct Ledger {
    storage: Storage,
    taxonomy: Taxonomy,
}

impl Ledger {
    /// Open the ledger stored under `paths`, using the settings' taxonomy
    pub fn open(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<Self> {
        let storage = Storage::new(paths)?;
        storage.load_all()?;
        tracing::debug!(base_dir = %paths.base_dir().display(), "ledger opened");
        Ok(Self {
            storage,
            taxonomy: settings.taxonomy(),
        })
    }

    /// A ledger over already-constructed storage, loading it first
    pub fn with_storage(storage: Storage, taxonomy: Taxonomy) -> LedgerResult<Self> {
        storage.load_all()?;
        Ok(Self { storage, taxonomy })
    }

    /// An empty ledger that is never persisted beyond the process
    pub fn in_memory() -> LedgerResult<Self> {
        Self::with_storage(Storage::in_memory(), Taxonomy::default())
    }

    pub fn entries(&self) -> EntryService<'_> {
        EntryService::new(&self.storage)
    }

    pub fn budgets(&self) -> BudgetService<'_> {
        BudgetService::new(&self.storage)
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Snapshots of the current entries and budget for report calls
    ///
    /// The view keeps seeing these versions even if the ledger changes
    /// afterwards.
    pub fn view(&self) -> LedgerResult<LedgerView> {
        Ok(LedgerView::new(
            self.storage.entries.snapshot()?,
            self.storage.budget.snapshot()?,
            self.taxonomy.clone(),
        ))
    }
}
