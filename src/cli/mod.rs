//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer and the reports.

pub mod budget;
pub mod entry;
pub mod report;
pub mod transfer;

pub use budget::{handle_budget_command, BudgetCommands};
pub use entry::{handle_add, handle_clear, handle_delete, handle_list, AddArgs, ListArgs};
pub use report::{handle_report_command, ReportCommands};
pub use transfer::{handle_export, handle_import};
