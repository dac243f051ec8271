//! Export and import
//!
//! - JSON: the entry collection as a plain array, for backup and wholesale
//!   replacement
//! - CSV: report tables for spreadsheets

pub mod csv;
pub mod json;

pub use self::csv::{export_budget_comparison, export_monthly_series};
pub use self::json::{export_entries, import_entries};
