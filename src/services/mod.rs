//! Service layer for Ledgerbook
//!
//! Validation, persistence and auditing on top of the storage layer.
//! Reports never go through here; they read a `LedgerView` instead.

pub mod budget;
pub mod entry;
pub mod ledger;

pub use budget::BudgetService;
pub use entry::{EntryFilter, EntryService};
pub use ledger::Ledger;
