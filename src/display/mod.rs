//! Display formatting for terminal output
//!
//! Plain text tables and bars; nothing here reads storage.

pub mod entry;
pub mod report;

pub use entry::{format_entry_details, format_entry_register, format_entry_row};
pub use report::{
    format_budget_allocations, format_budget_comparison, format_category_breakdown, format_chart,
    format_month_stats, format_monthly_series, format_taxonomy, format_top_categories,
};
