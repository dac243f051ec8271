//! Ledger entry model
//!
//! One recorded money movement. Entries are append-only: they are created
//! from validated user input, deleted individually, cleared, or replaced
//! wholesale by an import. They are never edited in place.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::EntryId;
use super::kind::Kind;
use super::money::Money;
use super::month::MonthKey;
use crate::error::{LedgerError, LedgerResult};

/// A recorded money movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, assigned at creation
    #[serde(default)]
    pub id: EntryId,

    /// ISO calendar date (`YYYY-MM-DD`)
    pub date: String,

    pub kind: Kind,

    /// Category name; not checked against the taxonomy
    pub category: String,

    /// Signed amount; anything non-numeric on disk reads back as zero
    #[serde(default)]
    pub amount: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default = "default_created_at")]
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Create a new entry with a fresh ID
    pub fn new(
        date: impl Into<String>,
        kind: Kind,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: EntryId::new(),
            date: date.into(),
            kind,
            category: category.into(),
            amount,
            note: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The month bucket this entry falls in
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(&self.date)
    }

    pub fn in_month(&self, month: &MonthKey) -> bool {
        month.contains_date(&self.date)
    }
}

fn default_created_at() -> DateTime<Utc> {
    Utc::now()
}

/// Raw, unvalidated input for a new entry
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub note: Option<String>,
}

impl EntryDraft {
    /// Validate the draft and turn it into an entry
    ///
    /// Rejects a missing date, kind or category, a date that is not
    /// `YYYY-MM-DD`, an unknown kind, and an amount that is not a number.
    pub fn validate(&self) -> LedgerResult<Entry> {
        let date = self.date.trim();
        if date.is_empty() {
            return Err(LedgerError::Validation("Date is required".into()));
        }
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            LedgerError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", date))
        })?;

        let kind = self.kind.trim();
        if kind.is_empty() {
            return Err(LedgerError::Validation("Kind is required".into()));
        }
        let kind: Kind = kind
            .parse()
            .map_err(|e: super::kind::KindParseError| LedgerError::Validation(e.to_string()))?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err(LedgerError::Validation("Category is required".into()));
        }

        let amount = Money::parse(&self.amount)
            .map_err(|e| LedgerError::Validation(format!("Invalid amount: {}", e)))?;

        let mut entry = Entry::new(date, kind, category, amount);
        entry.note = self
            .note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);
        Ok(entry)
    }
}
