//! Entry service
//!
//! Validates new entries and applies the four mutations the entry
//! collection supports: append, delete, clear and wholesale import. Each
//! one is persisted and audited before it returns.

use crate::audit::{EntityType, Operation};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Entry, EntryDraft, Kind, MonthKey};
use crate::storage::Storage;

/// Service for the entry collection
pub struct EntryService<'a> {
    storage: &'a Storage,
}

/// Options for filtering listed entries
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub month: Option<MonthKey>,
    pub kind: Option<Kind>,
    /// Maximum number of entries to return
    pub limit: Option<usize>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, entry: &Entry) -> bool {
        self.month.as_ref().map_or(true, |m| entry.in_month(m))
            && self.kind.map_or(true, |k| entry.kind == k)
    }
}

fn describe(entry: &Entry) -> String {
    format!("{} {}/{}", entry.date, entry.kind, entry.category)
}

impl<'a> EntryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate a draft and append it
    ///
    /// A rejected draft leaves the collection untouched.
    pub fn add(&self, draft: &EntryDraft) -> LedgerResult<Entry> {
        let entry = draft.validate()?;

        self.storage.entries.append(entry.clone())?;

        tracing::info!(id = %entry.id, date = %entry.date, kind = %entry.kind, "entry added");
        self.storage.log_create(
            EntityType::Entry,
            entry.id.short(),
            Some(describe(&entry)),
            &entry,
        )?;

        Ok(entry)
    }

    /// Find the single entry a full or shortened ID refers to
    pub fn find(&self, reference: &str) -> LedgerResult<Option<Entry>> {
        let mut matches = self.storage.entries.find(reference.trim())?;
        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(LedgerError::Validation(format!(
                "'{}' matches {} entries; use a longer ID",
                reference, n
            ))),
        }
    }

    /// Delete the entry a reference points to
    ///
    /// Returns `false` when nothing matches.
    pub fn delete(&self, reference: &str) -> LedgerResult<bool> {
        let Some(target) = self.find(reference)? else {
            return Ok(false);
        };

        let Some(removed) = self.storage.entries.remove(target.id)? else {
            return Ok(false);
        };

        tracing::info!(id = %removed.id, "entry deleted");
        self.storage.log_delete(
            EntityType::Entry,
            removed.id.short(),
            Some(describe(&removed)),
            &removed,
        )?;

        Ok(true)
    }

    /// Remove every entry, returning how many there were
    pub fn clear(&self) -> LedgerResult<usize> {
        let count = self.storage.entries.clear()?;

        tracing::info!(count, "entries cleared");
        self.storage
            .log_bulk(Operation::Clear, EntityType::Entry, count, 0)?;

        Ok(count)
    }

    /// Replace the whole collection with imported entries
    ///
    /// No merge and no validation: whatever was parsed becomes the
    /// collection, including an empty one.
    pub fn import(&self, entries: Vec<Entry>) -> LedgerResult<usize> {
        let before = self.storage.entries.count()?;
        let after = entries.len();

        self.storage.entries.replace_all(entries)?;

        tracing::info!(before, after, "entries imported");
        self.storage
            .log_bulk(Operation::Import, EntityType::Entry, before, after)?;

        Ok(after)
    }

    /// Entries matching a filter, newest date first
    pub fn list(&self, filter: &EntryFilter) -> LedgerResult<Vec<Entry>> {
        let snapshot = self.storage.entries.snapshot()?;
        let mut entries: Vec<Entry> = snapshot
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();

        entries.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        if let Some(limit) = filter.limit {
            entries.truncate(limit);
        }

        Ok(entries)
    }

    /// Every entry in insertion order
    pub fn all(&self) -> LedgerResult<Vec<Entry>> {
        Ok(self.storage.entries.snapshot()?.to_vec())
    }
}
