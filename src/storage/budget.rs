//! Budget allocation repository
//!
//! Owns the budget map and its persisted snapshot under the `budgets` key.
//! A new allocation is written to the store before readers can see it.

use std::sync::Arc;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetKey, BudgetMap, Money};

use super::blob::{BlobStore, BUDGETS_KEY};
use super::snapshot::{Snapshot, SnapshotCell};

/// Repository for budget allocation persistence
pub struct BudgetRepository {
    store: Arc<dyn BlobStore>,
    allocations: SnapshotCell<BudgetMap>,
}

impl BudgetRepository {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            allocations: SnapshotCell::new(BudgetMap::new()),
        }
    }

    /// Load allocations from the store
    ///
    /// Absent, unreadable or malformed data loads as an empty map.
    pub fn load(&self) -> LedgerResult<()> {
        let map = match self.store.load(BUDGETS_KEY) {
            Ok(Some(bytes)) => serde_json::from_slice::<BudgetMap>(&bytes).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored budgets are malformed, starting empty");
                BudgetMap::new()
            }),
            Ok(None) => BudgetMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored budgets, starting empty");
                BudgetMap::new()
            }
        };

        tracing::debug!(count = map.len(), "loaded budget allocations");
        self.allocations.replace(map)?;
        Ok(())
    }

    /// Persist the current snapshot
    pub fn save(&self) -> LedgerResult<()> {
        let snapshot = self.allocations.read()?;
        self.persist(snapshot.data())?;
        tracing::debug!(count = snapshot.len(), version = snapshot.version(), "saved budgets");
        Ok(())
    }

    fn persist(&self, map: &BudgetMap) -> LedgerResult<()> {
        let bytes = serde_json::to_vec_pretty(map)
            .map_err(|e| LedgerError::Storage(format!("Failed to serialize budgets: {}", e)))?;
        self.store.save(BUDGETS_KEY, &bytes)
    }

    /// The current map
    pub fn snapshot(&self) -> LedgerResult<Snapshot<BudgetMap>> {
        self.allocations.read()
    }

    /// Set an allocation, returning the value it replaced (zero if none)
    pub fn set(&self, key: BudgetKey, amount: Money) -> LedgerResult<Money> {
        let (previous, snapshot) = self
            .allocations
            .commit(|map| map.set(key, amount), |next| self.persist(next))?;
        tracing::debug!(count = snapshot.len(), version = snapshot.version(), "saved budgets");
        Ok(previous.unwrap_or_default())
    }

    pub fn get(&self, key: &BudgetKey) -> LedgerResult<Money> {
        Ok(self.allocations.read()?.get(key))
    }
}
