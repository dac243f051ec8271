//! Entry CLI commands
//!
//! Adding, deleting, clearing and listing ledger entries.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_entry_details, format_entry_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{EntryDraft, Kind, MonthKey};
use crate::services::{EntryFilter, Ledger};

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Entry date (YYYY-MM-DD)
    pub date: String,
    /// Income, Expenses, Savings or Investments
    pub kind: String,
    /// Category name (e.g., "Rent")
    pub category: String,
    /// Amount (e.g., "400" or "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Optional note
    #[arg(short, long)]
    pub note: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only entries in this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,
    /// Only entries of this kind
    #[arg(short, long)]
    pub kind: Option<String>,
    /// Number of entries to show
    #[arg(short, long, default_value = "50")]
    pub limit: usize,
}

/// Parse a kind argument into a validation error on failure
pub fn parse_kind(s: &str) -> LedgerResult<Kind> {
    s.parse()
        .map_err(|e: crate::models::KindParseError| LedgerError::Validation(e.to_string()))
}

/// Handle `add`
pub fn handle_add(ledger: &Ledger, settings: &Settings, args: AddArgs) -> LedgerResult<()> {
    let draft = EntryDraft {
        date: args.date,
        kind: args.kind,
        category: args.category,
        amount: args.amount,
        note: args.note,
    };

    let entry = ledger.entries().add(&draft)?;

    if !ledger.taxonomy().contains(entry.kind, &entry.category) {
        println!(
            "Note: '{}' is not a listed {} category; it will not appear in monthly reports.",
            entry.category, entry.kind
        );
    }

    println!("Added entry:");
    print!("{}", format_entry_details(&entry, &settings.currency_symbol));
    Ok(())
}

/// Handle `delete`
pub fn handle_delete(ledger: &Ledger, reference: &str) -> LedgerResult<()> {
    if ledger.entries().delete(reference)? {
        println!("Deleted entry {}", reference);
        Ok(())
    } else {
        Err(LedgerError::entry_not_found(reference))
    }
}

/// Handle `clear`
pub fn handle_clear(ledger: &Ledger, confirmed: bool) -> LedgerResult<()> {
    if !confirmed {
        return Err(LedgerError::Validation(
            "Clearing removes every entry. Re-run with --yes to confirm".into(),
        ));
    }

    let count = ledger.entries().clear()?;
    println!("Removed {} entries.", count);
    Ok(())
}

/// Handle `list`
pub fn handle_list(ledger: &Ledger, settings: &Settings, args: ListArgs) -> LedgerResult<()> {
    let mut filter = EntryFilter::new().limit(args.limit);
    if let Some(month) = args.month.as_deref() {
        filter = filter.month(MonthKey::parse(month)?);
    }
    if let Some(kind) = args.kind.as_deref() {
        filter = filter.kind(parse_kind(kind)?);
    }

    let entries = ledger.entries().list(&filter)?;
    print!("{}", format_entry_register(&entries, &settings.currency_symbol));
    Ok(())
}
