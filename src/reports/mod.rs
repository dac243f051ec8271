//! Reporting engine
//!
//! - `aggregator`: sums over entries and budget allocations
//! - `reconciler`: monthly series, budget vs tracked, top categories
//! - `chart`: scale and tick computation for bar charts
//!
//! Everything here is a pure function of one `LedgerView`, recomputed on
//! every call.

pub mod aggregator;
pub mod chart;
pub mod reconciler;

pub use aggregator::{Aggregator, KindTotals};
pub use chart::{bar_height_fraction, scale_max, ticks, ChartData, ChartSeries};
pub use reconciler::{
    BudgetComparison, CategoryTotal, CategoryVariance, MonthRow, MonthlySeries, Reconciler,
};

use crate::models::{BudgetMap, Entry, Kind, Taxonomy};
use crate::storage::Snapshot;

/// Snapshots of both root collections taken together, plus the taxonomy
///
/// Holding a view pins the versions it was built from; writes that happen
/// afterwards are not visible through it.
#[derive(Debug, Clone)]
pub struct LedgerView {
    entries: Snapshot<Vec<Entry>>,
    budget: Snapshot<BudgetMap>,
    taxonomy: Taxonomy,
}

impl LedgerView {
    pub fn new(entries: Snapshot<Vec<Entry>>, budget: Snapshot<BudgetMap>, taxonomy: Taxonomy) -> Self {
        Self {
            entries,
            budget,
            taxonomy,
        }
    }

    pub fn aggregator(&self) -> Aggregator<'_> {
        Aggregator::new(&self.entries, &self.budget, &self.taxonomy)
    }

    pub fn reconciler(&self) -> Reconciler<'_> {
        Reconciler::new(self.aggregator())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn budget(&self) -> &BudgetMap {
        &self.budget
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Grouped bar chart of the monthly series, one bar per kind
    pub fn monthly_chart(&self, step_count: usize) -> ChartData {
        let rows: Vec<MonthRow> = self.reconciler().monthly_series().collect();
        let labels = rows.iter().map(|r| r.month.to_string()).collect();
        let series = Kind::ALL
            .into_iter()
            .map(|kind| {
                let values = rows.iter().map(|r| r.get(kind).as_f64()).collect();
                (kind.to_string(), values)
            })
            .collect();
        ChartData::prepare(labels, series, step_count)
    }

    /// `(entries, budget)` versions this view was built from
    pub fn versions(&self) -> (u64, u64) {
        (self.entries.version(), self.budget.version())
    }
}
