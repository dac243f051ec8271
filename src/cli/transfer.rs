//! Export and import of the entry collection as JSON

use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_entries, import_entries};
use crate::services::Ledger;
use crate::storage::file_io::{read_bytes, write_bytes_atomic};

/// Handle `export <file>`
pub fn handle_export(ledger: &Ledger, path: &Path) -> LedgerResult<()> {
    let view = ledger.view()?;

    let mut buffer = Vec::new();
    export_entries(view.entries(), &mut buffer)?;
    write_bytes_atomic(path, &buffer)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    println!("Exported {} entries to: {}", view.entries().len(), path.display());
    Ok(())
}

/// Handle `import <file>`
///
/// The file replaces every current entry. A file that does not hold an
/// entry array leaves the ledger empty.
pub fn handle_import(ledger: &Ledger, path: &Path) -> LedgerResult<()> {
    let bytes = read_bytes(path)
        .map_err(|e| LedgerError::Import(e.to_string()))?
        .ok_or_else(|| LedgerError::Import(format!("{} does not exist", path.display())))?;

    let entries = import_entries(&bytes);
    let count = ledger.entries().import(entries)?;

    println!("Imported {} entries from: {}", count, path.display());
    Ok(())
}
