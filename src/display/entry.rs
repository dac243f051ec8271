//! Entry display formatting
//!
//! Register listing and single-entry details.

use crate::models::Entry;

use super::report::truncate;

/// Format a single entry as a register row
pub fn format_entry_row(entry: &Entry, symbol: &str) -> String {
    format!(
        "{:12} {:10} {:11} {:18} {:>14}  {}",
        entry.id.short(),
        truncate(&entry.date, 10),
        entry.kind,
        truncate(&entry.category, 18),
        entry.amount.format_with_symbol(symbol),
        entry.note.as_deref().unwrap_or("")
    )
}

/// Format a list of entries as a register
pub fn format_entry_register(entries: &[Entry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No entries found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:11} {:18} {:>14}  {}\n",
        "ID", "Date", "Kind", "Category", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for entry in entries {
        output.push_str(&format_entry_row(entry, symbol));
        output.push('\n');
    }

    output.push_str(&format!("\n{} entries\n", entries.len()));
    output
}

/// Format entry details for display
pub fn format_entry_details(entry: &Entry, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry:    {}\n", entry.id.short()));
    output.push_str(&format!("Date:     {}\n", entry.date));
    output.push_str(&format!("Kind:     {}\n", entry.kind));
    output.push_str(&format!("Category: {}\n", entry.category));
    output.push_str(&format!(
        "Amount:   {}\n",
        entry.amount.format_with_symbol(symbol)
    ));
    if let Some(note) = &entry.note {
        output.push_str(&format!("Note:     {}\n", note));
    }

    output
}
