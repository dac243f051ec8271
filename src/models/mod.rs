//! Core data models for Ledgerbook
//!
//! This module contains the data structures of the ledger domain: entries,
//! kinds, month keys, money, budget allocations and the category taxonomy.

pub mod budget;
pub mod entry;
pub mod ids;
pub mod kind;
pub mod money;
pub mod month;
pub mod taxonomy;

pub use budget::{BudgetKey, BudgetMap};
pub use entry::{Entry, EntryDraft};
pub use ids::EntryId;
pub use kind::{Kind, KindParseError};
pub use money::{Money, MoneyParseError};
pub use month::MonthKey;
pub use taxonomy::Taxonomy;
