//! Entry kinds
//!
//! The top-level classification of every ledger entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four kinds of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Kind {
    Income,
    Expenses,
    Savings,
    Investments,
}

impl Kind {
    /// Every kind, in declaration order
    pub const ALL: [Kind; 4] = [Kind::Income, Kind::Expenses, Kind::Savings, Kind::Investments];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "Income",
            Kind::Expenses => "Expenses",
            Kind::Savings => "Savings",
            Kind::Investments => "Investments",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindParseError(pub String);

impl fmt::Display for KindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown kind '{}' (expected Income, Expenses, Savings or Investments)",
            self.0
        )
    }
}

impl std::error::Error for KindParseError {}

impl FromStr for Kind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Kind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| KindParseError(s.to_string()))
    }
}
