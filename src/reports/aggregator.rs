//! Aggregator
//!
//! Sums and filters over one snapshot of the entry collection and budget
//! map. Every operation is total: no input makes it fail, and amounts that
//! were not valid numbers already read as zero.

use std::collections::BTreeSet;

use crate::models::{BudgetMap, Entry, Kind, Money, MonthKey, Taxonomy};

/// One value per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindTotals {
    pub income: Money,
    pub expenses: Money,
    pub savings: Money,
    pub investments: Money,
}

impl KindTotals {
    /// Build by evaluating `f` once per kind
    pub fn from_fn(mut f: impl FnMut(Kind) -> Money) -> Self {
        Self {
            income: f(Kind::Income),
            expenses: f(Kind::Expenses),
            savings: f(Kind::Savings),
            investments: f(Kind::Investments),
        }
    }

    pub fn get(&self, kind: Kind) -> Money {
        match kind {
            Kind::Income => self.income,
            Kind::Expenses => self.expenses,
            Kind::Savings => self.savings,
            Kind::Investments => self.investments,
        }
    }

    /// `(kind, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Kind, Money)> + '_ {
        Kind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

/// Read-only view over one snapshot of both root collections
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    entries: &'a [Entry],
    budget: &'a BudgetMap,
    taxonomy: &'a Taxonomy,
}

impl<'a> Aggregator<'a> {
    pub fn new(entries: &'a [Entry], budget: &'a BudgetMap, taxonomy: &'a Taxonomy) -> Self {
        Self {
            entries,
            budget,
            taxonomy,
        }
    }

    pub fn entries(&self) -> &'a [Entry] {
        self.entries
    }

    pub fn taxonomy(&self) -> &'a Taxonomy {
        self.taxonomy
    }

    /// Total of every entry of a kind, whatever its month or category
    pub fn sum_by_kind(&self, kind: Kind) -> Money {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.amount)
            .sum()
    }

    /// All-time totals for the four kinds
    pub fn totals_by_kind(&self) -> KindTotals {
        KindTotals::from_fn(|kind| self.sum_by_kind(kind))
    }

    /// Total of entries matching a month, kind and category exactly
    pub fn sum_for(&self, month: &MonthKey, kind: Kind, category: &str) -> Money {
        self.entries
            .iter()
            .filter(|e| e.kind == kind && e.category == category && month.contains_date(&e.date))
            .map(|e| e.amount)
            .sum()
    }

    /// Planned amount for a month, kind and category; zero when none was set
    pub fn budget_for(&self, month: &MonthKey, kind: Kind, category: &str) -> Money {
        self.budget.get_parts(month, kind, category)
    }

    /// Sum of the plans of every category the taxonomy lists for a kind
    pub fn month_budget_total(&self, month: &MonthKey, kind: Kind) -> Money {
        self.taxonomy
            .categories(kind)
            .iter()
            .map(|category| self.budget_for(month, kind, category))
            .sum()
    }

    /// Sum of the tracked totals of every category the taxonomy lists for a kind
    ///
    /// Entries filed under a category outside the list do not contribute.
    pub fn month_tracked_total(&self, month: &MonthKey, kind: Kind) -> Money {
        self.taxonomy
            .categories(kind)
            .iter()
            .map(|category| self.sum_for(month, kind, category))
            .sum()
    }

    /// Every month that has at least one entry, ascending and without repeats
    pub fn distinct_months(&self) -> Vec<MonthKey> {
        self.entries
            .iter()
            .map(Entry::month_key)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
