//! JSON export and import of the entry collection
//!
//! The format is a plain array of entry records. Import only checks that
//! the document parses into that shape; anything else yields no entries.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Entry;

/// Write entries as a pretty-printed JSON array
pub fn export_entries<W: Write>(entries: &[Entry], writer: &mut W) -> LedgerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, entries)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

/// Parse a JSON array of entries
///
/// Never fails: a document that is not an array of entries is logged and
/// treated as empty. Records without an `id` or `created_at` get fresh ones.
pub fn import_entries(bytes: &[u8]) -> Vec<Entry> {
    match serde_json::from_slice::<Vec<Entry>>(bytes) {
        Ok(entries) => {
            tracing::debug!(count = entries.len(), "parsed imported entries");
            entries
        }
        Err(e) => {
            tracing::warn!(error = %e, "import document is not an entry array, importing nothing");
            Vec::new()
        }
    }
}
