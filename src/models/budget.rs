//! Budget allocation model
//!
//! A planned amount for one (month, kind, category) triple. The map is
//! sparse: a key that was never set reads as a target of exactly zero, so
//! "no plan" and "planned zero" are the same thing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use super::kind::Kind;
use super::money::Money;
use super::month::MonthKey;
use crate::error::{LedgerError, LedgerResult};

/// Separator used by the flat on-disk form of a key
pub const KEY_SEPARATOR: char = '|';

/// Structured key of a budget allocation
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BudgetKey {
    pub month: MonthKey,
    pub kind: Kind,
    pub category: String,
}

impl BudgetKey {
    pub fn new(month: MonthKey, kind: Kind, category: impl Into<String>) -> Self {
        Self {
            month,
            kind,
            category: category.into(),
        }
    }

    /// Flat `month|kind|category` form
    pub fn to_flat(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.month,
            self.kind,
            self.category,
            sep = KEY_SEPARATOR
        )
    }

    /// Parse the flat form
    ///
    /// Splits on the first two separators only, so a category that itself
    /// contains `|` comes back intact.
    pub fn parse_flat(flat: &str) -> LedgerResult<Self> {
        let mut parts = flat.splitn(3, KEY_SEPARATOR);
        let (month, kind, category) = match (parts.next(), parts.next(), parts.next()) {
            (Some(m), Some(k), Some(c)) => (m, k, c),
            _ => {
                return Err(LedgerError::Validation(format!(
                    "Invalid budget key '{}'",
                    flat
                )))
            }
        };
        let month = MonthKey::parse(month)?;
        let kind: Kind = kind
            .parse()
            .map_err(|e: super::kind::KindParseError| LedgerError::Validation(e.to_string()))?;
        Ok(Self::new(month, kind, category))
    }
}

impl fmt::Display for BudgetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_flat())
    }
}

/// Sparse map from budget key to target amount
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetMap {
    allocations: BTreeMap<BudgetKey, Money>,
}

impl BudgetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target for a key, replacing any previous value
    pub fn set(&mut self, key: BudgetKey, amount: Money) -> Option<Money> {
        self.allocations.insert(key, amount)
    }

    /// The target for a key, or zero when none was set
    pub fn get(&self, key: &BudgetKey) -> Money {
        self.allocations.get(key).copied().unwrap_or_default()
    }

    pub fn get_parts(&self, month: &MonthKey, kind: Kind, category: &str) -> Money {
        self.get(&BudgetKey::new(month.clone(), kind, category))
    }

    /// All explicit allocations for a month, in key order
    pub fn for_month<'a>(
        &'a self,
        month: &'a MonthKey,
    ) -> impl Iterator<Item = (&'a BudgetKey, Money)> + 'a {
        self.allocations
            .iter()
            .filter(move |(k, _)| k.month == *month)
            .map(|(k, v)| (k, *v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BudgetKey, Money)> {
        self.allocations.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Build from the flat form, skipping keys that do not parse
    pub fn from_flat(flat: BTreeMap<String, Money>) -> Self {
        let mut map = Self::new();
        for (raw, amount) in flat {
            match BudgetKey::parse_flat(&raw) {
                Ok(key) => {
                    map.set(key, amount);
                }
                Err(e) => tracing::warn!(key = %raw, error = %e, "skipping budget allocation"),
            }
        }
        map
    }

    pub fn to_flat(&self) -> BTreeMap<String, Money> {
        self.allocations
            .iter()
            .map(|(k, v)| (k.to_flat(), *v))
            .collect()
    }
}

impl Serialize for BudgetMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_flat().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BudgetMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flat = BTreeMap::<String, Money>::deserialize(deserializer)?;
        Ok(Self::from_flat(flat))
    }
}
