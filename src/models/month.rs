//! Month keys
//!
//! The `YYYY-MM` time bucket every aggregation groups by. A month key is
//! always derived from an entry's date and compares lexicographically, which
//! for well-formed keys is the same as chronological order.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthKey(String);

impl MonthKey {
    /// Derive the month bucket of an ISO date: its first seven characters
    pub fn from_date(date: &str) -> Self {
        Self(date_prefix(date).to_string())
    }

    /// Does a date fall in this bucket?
    pub fn contains_date(&self, date: &str) -> bool {
        date_prefix(date) == self.0
    }

    /// Parse a user-supplied `YYYY-MM` string, rejecting anything else
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        let s = s.trim();
        let invalid = || {
            LedgerError::Validation(format!(
                "Invalid month '{}'. Use YYYY-MM (e.g., 2026-01)",
                s
            ))
        };

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let digits = |part: &str, len: usize| {
            part.len() == len && part.chars().all(|c| c.is_ascii_digit())
        };
        if !digits(year, 4) || !digits(month, 2) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self::from_year_month(year, month))
    }

    pub fn from_year_month(year: i32, month: u32) -> Self {
        Self(format!("{:04}-{:02}", year, month))
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::from_year_month(today.year(), today.month())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// "January 2026" for well-formed keys, the raw key otherwise
    pub fn friendly(&self) -> String {
        NaiveDate::parse_from_str(&format!("{}-01", self.0), "%Y-%m-%d")
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|_| self.0.clone())
    }
}

fn date_prefix(date: &str) -> &str {
    let end = date
        .char_indices()
        .nth(7)
        .map(|(idx, _)| idx)
        .unwrap_or(date.len());
    &date[..end]
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MonthKey {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date_takes_prefix() {
        assert_eq!(MonthKey::from_date("2026-01-05").as_str(), "2026-01");
        assert_eq!(MonthKey::from_date("2026-01").as_str(), "2026-01");
        assert_eq!(MonthKey::from_date("2026").as_str(), "2026");
        assert_eq!(MonthKey::from_date("").as_str(), "");
    }

    #[test]
    fn test_same_prefix_same_bucket() {
        assert_eq!(
            MonthKey::from_date("2026-03-01"),
            MonthKey::from_date("2026-03-31")
        );
    }

    #[test]
    fn test_contains_date() {
        let jan = MonthKey::parse("2026-01").unwrap();
        assert!(jan.contains_date("2026-01-31"));
        assert!(!jan.contains_date("2026-02-01"));
        assert!(!jan.contains_date("2026-0"));
    }

    #[test]
    fn test_parse() {
        assert_eq!(MonthKey::parse("2026-01").unwrap().as_str(), "2026-01");
        assert!(MonthKey::parse("2026-13").is_err());
        assert!(MonthKey::parse("2026-1").is_err());
        assert!(MonthKey::parse("26-01").is_err());
        assert!(MonthKey::parse("January").is_err());
        assert!(MonthKey::parse("+026-01").is_err());
        assert!(MonthKey::parse("2026-+1").is_err());
        assert!(MonthKey::parse("-026-01").is_err());
        assert!(MonthKey::parse(" 2026-01 ").is_ok());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut months = vec![
            MonthKey::parse("2026-02").unwrap(),
            MonthKey::parse("2025-12").unwrap(),
            MonthKey::parse("2026-01").unwrap(),
        ];
        months.sort();
        let keys: Vec<_> = months.iter().map(|m| m.as_str()).collect();
        assert_eq!(keys, vec!["2025-12", "2026-01", "2026-02"]);
    }

    #[test]
    fn test_friendly() {
        assert_eq!(MonthKey::parse("2026-01").unwrap().friendly(), "January 2026");
        assert_eq!(MonthKey::from_date("garbage").friendly(), "garbage");
    }
}
