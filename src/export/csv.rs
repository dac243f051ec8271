//! CSV export of report tables

use std::io::Write;

use csv::Writer;

use crate::error::LedgerResult;
use crate::models::{Kind, Money};
use crate::reports::{BudgetComparison, MonthRow};

fn amount(value: Money) -> String {
    value.format_with_symbol("")
}

/// Write one row per month: income, expenses, savings, investments, net
pub fn export_monthly_series<W, I>(rows: I, writer: W) -> LedgerResult<usize>
where
    W: Write,
    I: IntoIterator<Item = MonthRow>,
{
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["Month", "Income", "Expenses", "Savings", "Investments", "Net"])?;

    let mut count = 0;
    for row in rows {
        wtr.write_record([
            row.month.to_string(),
            amount(row.income),
            amount(row.expenses),
            amount(row.savings),
            amount(row.investments),
            amount(row.net),
        ])?;
        count += 1;
    }

    wtr.flush()?;
    Ok(count)
}

/// Write budget, tracked and variance for each kind of one month
pub fn export_budget_comparison<W: Write>(
    comparison: &BudgetComparison,
    writer: W,
) -> LedgerResult<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["Month", "Kind", "Budget", "Tracked", "Variance"])?;

    for kind in Kind::ALL {
        wtr.write_record([
            comparison.month.to_string(),
            kind.to_string(),
            amount(comparison.budget.get(kind)),
            amount(comparison.tracked.get(kind)),
            amount(comparison.variance(kind)),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
