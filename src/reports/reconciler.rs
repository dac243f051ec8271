//! Reconciler
//!
//! Combines aggregator results per month: the month-over-month series, the
//! budget-vs-tracked comparison and top-category rankings.
//!
//! Variance is always `budget - tracked`. A positive variance means the month
//! came in under budget, a negative one means it went over.

use crate::models::{Kind, Money, MonthKey};

use super::aggregator::{Aggregator, KindTotals};

/// Tracked totals of one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRow {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
    pub savings: Money,
    pub investments: Money,
    /// income - expenses - savings - investments
    pub net: Money,
}

impl MonthRow {
    /// Row for a month with nothing recorded
    pub fn zero(month: MonthKey) -> Self {
        Self::from_totals(month, KindTotals::default())
    }

    fn from_totals(month: MonthKey, totals: KindTotals) -> Self {
        Self {
            month,
            income: totals.income,
            expenses: totals.expenses,
            savings: totals.savings,
            investments: totals.investments,
            net: totals.income - totals.expenses - totals.savings - totals.investments,
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
}

/// Lazy month-by-month rows, ascending by month
///
/// Each row is computed when it is pulled. Cloning the iterator gives an
/// independent pass over the same months.
#[derive(Debug, Clone)]
pub struct MonthlySeries<'a> {
    aggregator: Aggregator<'a>,
    months: std::vec::IntoIter<MonthKey>,
}

impl Iterator for MonthlySeries<'_> {
    type Item = MonthRow;

    fn next(&mut self) -> Option<MonthRow> {
        let month = self.months.next()?;
        Some(row_for(&self.aggregator, month))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.months.size_hint()
    }
}

impl ExactSizeIterator for MonthlySeries<'_> {}

fn row_for(aggregator: &Aggregator<'_>, month: MonthKey) -> MonthRow {
    let totals = KindTotals::from_fn(|kind| aggregator.month_tracked_total(&month, kind));
    MonthRow::from_totals(month, totals)
}

/// Budget and tracked totals per kind for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetComparison {
    pub month: MonthKey,
    pub budget: KindTotals,
    pub tracked: KindTotals,
}

impl BudgetComparison {
    /// `budget - tracked` for a kind; positive means under budget
    pub fn variance(&self, kind: Kind) -> Money {
        self.budget.get(kind) - self.tracked.get(kind)
    }

    pub fn variances(&self) -> KindTotals {
        KindTotals::from_fn(|kind| self.variance(kind))
    }
}

/// A category and its tracked total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Plan, actual and variance of one category in one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryVariance {
    pub category: String,
    pub budget: Money,
    pub tracked: Money,
    pub variance: Money,
}

/// Month-level views built from an aggregator
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'a> {
    aggregator: Aggregator<'a>,
}

impl<'a> Reconciler<'a> {
    pub fn new(aggregator: Aggregator<'a>) -> Self {
        Self { aggregator }
    }

    pub fn aggregator(&self) -> &Aggregator<'a> {
        &self.aggregator
    }

    /// One row per month that has entries, recomputed on every call
    pub fn monthly_series(&self) -> MonthlySeries<'a> {
        MonthlySeries {
            aggregator: self.aggregator,
            months: self.aggregator.distinct_months().into_iter(),
        }
    }

    /// The series row for a month, or an all-zero row when it has no entries
    ///
    /// Computing the row directly gives the same values the series would,
    /// and a month with no entries comes out all zero on its own.
    pub fn selected_month_stats(&self, month: &MonthKey) -> MonthRow {
        row_for(&self.aggregator, month.clone())
    }

    pub fn budget_vs_tracked(&self, month: &MonthKey) -> BudgetComparison {
        BudgetComparison {
            month: month.clone(),
            budget: KindTotals::from_fn(|kind| self.aggregator.month_budget_total(month, kind)),
            tracked: KindTotals::from_fn(|kind| self.aggregator.month_tracked_total(month, kind)),
        }
    }

    /// Categories with a non-zero total, largest first
    ///
    /// Ties keep the taxonomy's declaration order. At most `limit` results.
    pub fn top_categories(&self, month: &MonthKey, kind: Kind, limit: usize) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = self
            .aggregator
            .taxonomy()
            .categories(kind)
            .iter()
            .map(|category| CategoryTotal {
                category: category.clone(),
                total: self.aggregator.sum_for(month, kind, category),
            })
            .filter(|c| !c.total.is_zero())
            .collect();

        // Stable sort: equal totals stay in declaration order
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        totals.truncate(limit);
        totals
    }

    /// Per-category plan vs actual for every category of a kind
    pub fn category_breakdown(&self, month: &MonthKey, kind: Kind) -> Vec<CategoryVariance> {
        self.aggregator
            .taxonomy()
            .categories(kind)
            .iter()
            .map(|category| {
                let budget = self.aggregator.budget_for(month, kind, category);
                let tracked = self.aggregator.sum_for(month, kind, category);
                CategoryVariance {
                    category: category.clone(),
                    budget,
                    tracked,
                    variance: budget - tracked,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetKey, BudgetMap, Entry, Taxonomy};

    fn month(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    fn entry(date: &str, kind: Kind, category: &str, units: i64) -> Entry {
        Entry::new(date, kind, category, Money::from_units(units))
    }

    fn scenario() -> (Vec<Entry>, BudgetMap) {
        let entries = vec![
            entry("2026-01-05", Kind::Income, "Salary", 1000),
            entry("2026-01-10", Kind::Expenses, "Rent", 400),
        ];
        let mut budget = BudgetMap::new();
        budget.set(
            BudgetKey::new(month("2026-01"), Kind::Expenses, "Rent"),
            Money::from_units(500),
        );
        (entries, budget)
    }

    #[test]
    fn test_january_scenario() {
        let (entries, budget) = scenario();
        let taxonomy = Taxonomy::default();
        let rec = Reconciler::new(Aggregator::new(&entries, &budget, &taxonomy));
        let jan = month("2026-01");

        let agg = rec.aggregator();
        assert_eq!(agg.month_tracked_total(&jan, Kind::Expenses), Money::from_units(400));
        assert_eq!(agg.month_budget_total(&jan, Kind::Expenses), Money::from_units(500));

        let comparison = rec.budget_vs_tracked(&jan);
        assert_eq!(comparison.variance(Kind::Expenses), Money::from_units(100));

        let stats = rec.selected_month_stats(&jan);
        assert_eq!(stats.net, Money::from_units(600));
        assert_eq!(stats.income, Money::from_units(1000));
    }

    #[test]
    fn test_unknown_month_is_zero_row() {
        let (entries, budget) = scenario();
        let taxonomy = Taxonomy::default();
        let rec = Reconciler::new(Aggregator::new(&entries, &budget, &taxonomy));

        let far = month("2099-01");
        assert_eq!(rec.selected_month_stats(&far), MonthRow::zero(far));
    }

    #[test]
    fn test_selected_stats_agree_with_series() {
        let (mut entries, budget) = scenario();
        entries.push(entry("2026-02-03", Kind::Savings, "Vacation", 150));
        entries.push(entry("2026-02-04", Kind::Investments, "ETFs", 200));
        let taxonomy = Taxonomy::default();
        let rec = Reconciler::new(Aggregator::new(&entries, &budget, &taxonomy));

        for row in rec.monthly_series() {
            assert_eq!(rec.selected_month_stats(&row.month), row);
        }
    }

    #[test]
    fn test_monthly_series_ordered_and_restartable() {
        let (mut entries, budget) = scenario();
        entries.push(entry("2025-11-30", Kind::Income, "Bonus", 50));
        entries.push(entry("2026-02-03", Kind::Savings, "Vacation", 150));
        let taxonomy = Taxonomy::default();
        let rec = Reconciler::new(Aggregator::new(&entries, &budget, &taxonomy));

        let series = rec.monthly_series();
        assert_eq!(series.len(), 3);
        let first_pass: Vec<MonthRow> = series.clone().collect();
        let second_pass: Vec<MonthRow> = series.collect();
        assert_eq!(first_pass, second_pass);

        let months: Vec<&str> = first_pass.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["2025-11", "2026-01", "2026-02"]);
        assert_eq!(first_pass[2].net, Money::from_units(-150));
    }

    #[test]
    fn test_variance_sign_convention() {
        let (mut entries, budget) = scenario();
        entries.push(entry("2026-01-25", Kind::Expenses, "Rent", 300));
        let taxonomy = Taxonomy::default();
        let rec = Reconciler::new(Aggregator::new(&entries, &budget, &taxonomy));
        let jan = month("2026-01");

        let comparison = rec.budget_vs_tracked(&jan);
        // 500 planned, 700 spent: over budget
        assert_eq!(comparison.variance(Kind::Expenses), Money::from_units(-200));
        for kind in Kind::ALL {
            let agg = rec.aggregator();
            assert_eq!(
                comparison.variance(kind),
                agg.month_budget_total(&jan, kind) - agg.month_tracked_total(&jan, kind)
            );
        }
        // No plan, 1000 earned
        assert_eq!(comparison.variances().income, Money::from_units(-1000));
    }

    #[test]
    fn test_top_categories() {
        let entries = vec![
            entry("2026-01-01", Kind::Expenses, "Dining", 50),
            entry("2026-01-02", Kind::Expenses, "Rent", 400),
            entry("2026-01-03", Kind::Expenses, "Transport", 50),
            entry("2026-01-04", Kind::Expenses, "Groceries", 120),
            entry("2026-01-05", Kind::Expenses, "Health", 10),
            entry("2026-01-06", Kind::Expenses, "Travel", 5),
            entry("2026-01-07", Kind::Expenses, "Shopping", 1),
            entry("2026-01-08", Kind::Expenses, "Utilities", 30),
            entry("2026-01-09", Kind::Expenses, "Utilities", -30),
            entry("2026-02-01", Kind::Expenses, "Education", 9999),
        ];
        let budget = BudgetMap::new();
        let taxonomy = Taxonomy::default();
        let rec = Reconciler::new(Aggregator::new(&entries, &budget, &taxonomy));

        let top = rec.top_categories(&month("2026-01"), Kind::Expenses, 5);
        let names: Vec<&str> = top.iter().map(|c| c.category.as_str()).collect();
        // Transport is declared before Dining, so it wins the tie; Utilities nets to zero
        assert_eq!(names, vec!["Rent", "Groceries", "Transport", "Dining", "Health"]);
        assert!(top.windows(2).all(|w| w[0].total >= w[1].total));
        assert!(top.iter().all(|c| !c.total.is_zero()));

        assert!(rec.top_categories(&month("2026-01"), Kind::Income, 5).is_empty());
        assert!(rec.top_categories(&month("2026-01"), Kind::Expenses, 0).is_empty());
    }

    #[test]
    fn test_category_breakdown() {
        let (entries, budget) = scenario();
        let taxonomy = Taxonomy::default();
        let rec = Reconciler::new(Aggregator::new(&entries, &budget, &taxonomy));

        let rows = rec.category_breakdown(&month("2026-01"), Kind::Expenses);
        assert_eq!(rows.len(), taxonomy.categories(Kind::Expenses).len());
        assert_eq!(rows[0].category, "Rent");
        assert_eq!(rows[0].variance, Money::from_units(100));
        assert!(rows[1..].iter().all(|r| r.variance.is_zero()));
    }
}
