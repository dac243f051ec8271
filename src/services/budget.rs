//! Budget service
//!
//! Sets and reads planned amounts. An allocation is never removed; setting
//! it to zero is how a plan is cleared.

use crate::audit::EntityType;
use crate::error::LedgerResult;
use crate::models::{BudgetKey, Money, MonthKey};
use crate::storage::Storage;

/// Service for budget allocations
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the plan for a key, last write wins
    ///
    /// Returns the amount it replaced (zero when there was none).
    pub fn set(&self, key: BudgetKey, amount: Money) -> LedgerResult<Money> {
        let flat = key.to_flat();
        let previous = self.storage.budget.set(key, amount)?;

        tracing::info!(key = %flat, %previous, %amount, "budget allocation set");
        self.storage.log_update(
            EntityType::BudgetAllocation,
            flat,
            None,
            &previous,
            &amount,
            Some(format!("{} -> {}", previous, amount)),
        )?;

        Ok(previous)
    }

    /// The plan for a key, zero when none was set
    pub fn get(&self, key: &BudgetKey) -> LedgerResult<Money> {
        self.storage.budget.get(key)
    }

    /// Every explicit allocation in a month, in key order
    pub fn list_month(&self, month: &MonthKey) -> LedgerResult<Vec<(BudgetKey, Money)>> {
        let snapshot = self.storage.budget.snapshot()?;
        Ok(snapshot
            .for_month(month)
            .map(|(key, amount)| (key.clone(), amount))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditLogger, Operation};
    use crate::models::Kind;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let storage = Storage::in_memory().with_audit(logger);
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn key(month: &str, kind: Kind, category: &str) -> BudgetKey {
        BudgetKey::new(MonthKey::parse(month).unwrap(), kind, category)
    }

    #[test]
    fn test_set_last_write_wins() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let rent = key("2026-01", Kind::Expenses, "Rent");

        assert!(service.set(rent.clone(), Money::from_units(500)).unwrap().is_zero());
        assert_eq!(
            service.set(rent.clone(), Money::from_units(650)).unwrap(),
            Money::from_units(500)
        );
        assert_eq!(service.get(&rent).unwrap(), Money::from_units(650));

        let audit = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(audit.len(), 2);
        assert_eq!(audit[1].operation, Operation::Update);
        assert_eq!(audit[1].entity_id, "2026-01|Expenses|Rent");
    }

    #[test]
    fn test_absent_reads_zero() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        assert!(service
            .get(&key("2026-01", Kind::Savings, "Home"))
            .unwrap()
            .is_zero());
    }

    #[test]
    fn test_zero_clears_plan() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let rent = key("2026-01", Kind::Expenses, "Rent");
        service.set(rent.clone(), Money::from_units(500)).unwrap();
        service.set(rent.clone(), Money::zero()).unwrap();
        assert!(service.get(&rent).unwrap().is_zero());
    }

    #[test]
    fn test_list_month() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        service
            .set(key("2026-01", Kind::Expenses, "Rent"), Money::from_units(500))
            .unwrap();
        service
            .set(key("2026-01", Kind::Income, "Salary"), Money::from_units(1000))
            .unwrap();
        service
            .set(key("2026-02", Kind::Expenses, "Rent"), Money::from_units(500))
            .unwrap();

        let jan = service.list_month(&MonthKey::parse("2026-01").unwrap()).unwrap();
        assert_eq!(jan.len(), 2);
        assert!(jan.iter().all(|(k, _)| k.month.as_str() == "2026-01"));
    }
}
