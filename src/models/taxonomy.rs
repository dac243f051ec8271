//! Category taxonomy
//!
//! Each kind has a fixed, ordered list of allowed category names. The list
//! is fixed for the lifetime of the process. Per-category aggregation walks
//! this table rather than the categories seen in data, and the list order is
//! the tie-breaker when ranking categories.

use std::collections::BTreeMap;

use super::kind::Kind;

const INCOME: &[&str] = &[
    "Salary",
    "Bonus",
    "Freelance",
    "Interest",
    "Dividends",
    "Gifts",
    "Other",
];

const EXPENSES: &[&str] = &[
    "Rent",
    "Utilities",
    "Groceries",
    "Transport",
    "Dining",
    "Health",
    "Insurance",
    "Entertainment",
    "Shopping",
    "Subscriptions",
    "Travel",
    "Education",
    "Other",
];

const SAVINGS: &[&str] = &["Emergency Fund", "Retirement", "Vacation", "Home", "Other"];

const INVESTMENTS: &[&str] = &["Stocks", "ETFs", "Bonds", "Crypto", "Real Estate", "Other"];

/// Ordered allowed categories per kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    income: Vec<String>,
    expenses: Vec<String>,
    savings: Vec<String>,
    investments: Vec<String>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        let owned = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            income: owned(INCOME),
            expenses: owned(EXPENSES),
            savings: owned(SAVINGS),
            investments: owned(INVESTMENTS),
        }
    }
}

impl Taxonomy {
    /// The built-in table with the lists of any overridden kinds replaced
    ///
    /// Empty names and repeats within a list are dropped; an override that
    /// ends up empty leaves the built-in list in place.
    pub fn with_overrides(overrides: &BTreeMap<Kind, Vec<String>>) -> Self {
        let mut taxonomy = Self::default();
        for (kind, names) in overrides {
            let mut cleaned: Vec<String> = Vec::with_capacity(names.len());
            for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
                if !cleaned.iter().any(|c| c == name) {
                    cleaned.push(name.to_string());
                }
            }
            if !cleaned.is_empty() {
                *taxonomy.list_mut(*kind) = cleaned;
            }
        }
        taxonomy
    }

    /// Allowed categories of a kind, in declaration order
    pub fn categories(&self, kind: Kind) -> &[String] {
        match kind {
            Kind::Income => &self.income,
            Kind::Expenses => &self.expenses,
            Kind::Savings => &self.savings,
            Kind::Investments => &self.investments,
        }
    }

    pub fn contains(&self, kind: Kind, category: &str) -> bool {
        self.categories(kind).iter().any(|c| c == category)
    }

    fn list_mut(&mut self, kind: Kind) -> &mut Vec<String> {
        match kind {
            Kind::Income => &mut self.income,
            Kind::Expenses => &mut self.expenses,
            Kind::Savings => &mut self.savings,
            Kind::Investments => &mut self.investments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists() {
        let taxonomy = Taxonomy::default();
        assert_eq!(taxonomy.categories(Kind::Expenses)[0], "Rent");
        assert!(taxonomy.contains(Kind::Income, "Salary"));
        assert!(!taxonomy.contains(Kind::Income, "Rent"));
        assert_eq!(taxonomy.categories(Kind::Savings)[2], "Vacation");
    }

    #[test]
    fn test_overrides_replace_named_kinds_only() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            Kind::Savings,
            vec!["Car".to_string(), " ".to_string(), "Car".to_string(), "Wedding".to_string()],
        );
        overrides.insert(Kind::Investments, vec![]);

        let taxonomy = Taxonomy::with_overrides(&overrides);
        assert_eq!(taxonomy.categories(Kind::Savings), ["Car", "Wedding"]);
        assert_eq!(
            taxonomy.categories(Kind::Investments),
            Taxonomy::default().categories(Kind::Investments)
        );
        assert_eq!(
            taxonomy.categories(Kind::Expenses),
            Taxonomy::default().categories(Kind::Expenses)
        );
    }
}
