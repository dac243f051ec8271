//! Report formatting for terminal output
//!
//! Month statistics, budget comparisons, rankings and a text bar chart.
//! Amounts are printed with the configured currency symbol.

use crate::models::{BudgetKey, Kind, Money, MonthKey, Taxonomy};
use crate::reports::{BudgetComparison, CategoryTotal, CategoryVariance, ChartData, MonthRow};

const WIDTH: usize = 64;
const BAR_WIDTH: usize = 30;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 {
        return " ".repeat(width);
    }
    format_bar_fraction(value / max_value, width)
}

/// Draw a bar already scaled to a fraction of its full width
///
/// Non-positive and non-finite fractions draw an empty bar.
pub fn format_bar_fraction(fraction: f64, width: usize) -> String {
    if fraction <= 0.0 || !fraction.is_finite() {
        return " ".repeat(width);
    }

    let filled = (fraction * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

fn title_block(title: &str) -> String {
    format!(
        "{}\n{}\n{}\n",
        double_separator(WIDTH),
        format_header(title, WIDTH),
        double_separator(WIDTH)
    )
}

/// Totals of one month per kind, plus net
pub fn format_month_stats(row: &MonthRow, symbol: &str) -> String {
    let mut output = title_block(&row.month.friendly());

    for kind in Kind::ALL {
        output.push_str(&format!(
            "{:14} {:>16}\n",
            kind.as_str(),
            row.get(kind).format_with_symbol(symbol)
        ));
    }
    output.push_str(&separator(31));
    output.push('\n');
    output.push_str(&format!(
        "{:14} {:>16}\n",
        "Net",
        row.net.format_with_symbol(symbol)
    ));

    output
}

/// One line per month with entries
pub fn format_monthly_series(rows: impl IntoIterator<Item = MonthRow>, symbol: &str) -> String {
    let rows: Vec<MonthRow> = rows.into_iter().collect();
    if rows.is_empty() {
        return "No entries recorded yet.\n".to_string();
    }

    let mut output = title_block("Monthly Summary");
    output.push_str(&format!(
        "{:8} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
        "Month", "Income", "Expenses", "Savings", "Investments", "Net"
    ));
    output.push_str(&separator(WIDTH + 9));
    output.push('\n');

    for row in &rows {
        output.push_str(&format!(
            "{:8} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
            row.month.as_str(),
            row.income.format_with_symbol(symbol),
            row.expenses.format_with_symbol(symbol),
            row.savings.format_with_symbol(symbol),
            row.investments.format_with_symbol(symbol),
            row.net.format_with_symbol(symbol)
        ));
    }

    output
}

fn variance_note(variance: Money) -> &'static str {
    if variance.is_negative() {
        "over"
    } else if variance.is_positive() {
        "under"
    } else {
        ""
    }
}

/// Budget, tracked and variance per kind for one month
pub fn format_budget_comparison(comparison: &BudgetComparison, symbol: &str) -> String {
    let mut output = title_block(&format!("Budget vs Tracked: {}", comparison.month.friendly()));
    output.push_str(&format!(
        "{:14} {:>14} {:>14} {:>14}\n",
        "Kind", "Budget", "Tracked", "Variance"
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    for kind in Kind::ALL {
        let variance = comparison.variance(kind);
        output.push_str(&format!(
            "{:14} {:>14} {:>14} {:>14} {}\n",
            kind.as_str(),
            comparison.budget.get(kind).format_with_symbol(symbol),
            comparison.tracked.get(kind).format_with_symbol(symbol),
            variance.format_with_symbol(symbol),
            variance_note(variance)
        ));
    }

    output
}

/// Per-category plan vs actual, skipping categories with neither
pub fn format_category_breakdown(
    month: &MonthKey,
    kind: Kind,
    rows: &[CategoryVariance],
    symbol: &str,
) -> String {
    let active: Vec<&CategoryVariance> = rows
        .iter()
        .filter(|r| !r.budget.is_zero() || !r.tracked.is_zero())
        .collect();

    let mut output = format!("\n{} by category, {}\n", kind, month.friendly());
    if active.is_empty() {
        output.push_str("  (nothing budgeted or tracked)\n");
        return output;
    }

    for row in active {
        let used = if row.budget.is_positive() {
            format_percentage(row.tracked.as_f64() / row.budget.as_f64() * 100.0)
        } else {
            "-".to_string()
        };
        output.push_str(&format!(
            "  {:18} {:>12} {:>12} {:>12} {:>6}\n",
            truncate(&row.category, 18),
            row.budget.format_with_symbol(symbol),
            row.tracked.format_with_symbol(symbol),
            row.variance.format_with_symbol(symbol),
            used
        ));
    }

    output
}

/// Ranked categories with proportional bars
pub fn format_top_categories(
    month: &MonthKey,
    kind: Kind,
    totals: &[CategoryTotal],
    symbol: &str,
) -> String {
    let mut output = title_block(&format!("Top {} categories: {}", kind, month.friendly()));
    if totals.is_empty() {
        output.push_str("No entries for this month.\n");
        return output;
    }

    let max = totals
        .iter()
        .map(|t| t.total.as_f64().abs())
        .fold(0.0, f64::max);

    for (rank, total) in totals.iter().enumerate() {
        output.push_str(&format!(
            "{:>2}. {:18} {:>14}  {}\n",
            rank + 1,
            truncate(&total.category, 18),
            total.total.format_with_symbol(symbol),
            format_bar(total.total.as_f64(), max, 20)
        ));
    }

    output
}

/// Text rendering of a grouped bar chart, one block per label
pub fn format_chart(chart: &ChartData) -> String {
    if chart.is_empty() {
        return "No entries recorded yet.\n".to_string();
    }

    let mut output = title_block("Monthly Chart");
    let scale: Vec<String> = chart.ticks.iter().map(|t| format!("{:.0}", t)).collect();
    output.push_str(&format!("Scale: {}\n", scale.join(" | ")));

    for (idx, label) in chart.labels.iter().enumerate() {
        output.push('\n');
        output.push_str(label);
        output.push('\n');
        for series in &chart.series {
            let value = series.values.get(idx).copied().unwrap_or(0.0);
            let fraction = series.fractions.get(idx).copied().unwrap_or(0.0);
            output.push_str(&format!(
                "  {:12} {} {:.2}\n",
                series.name,
                format_bar_fraction(fraction, BAR_WIDTH),
                value
            ));
        }
    }

    output
}

/// Explicit allocations of one month
pub fn format_budget_allocations(
    month: &MonthKey,
    allocations: &[(BudgetKey, Money)],
    symbol: &str,
) -> String {
    let mut output = format!("Budget for {}\n", month.friendly());
    output.push_str(&separator(48));
    output.push('\n');

    if allocations.is_empty() {
        output.push_str("No allocations set.\n");
        return output;
    }

    for (key, amount) in allocations {
        output.push_str(&format!(
            "{:12} {:20} {:>14}\n",
            key.kind.as_str(),
            truncate(&key.category, 20),
            amount.format_with_symbol(symbol)
        ));
    }

    let total: Money = allocations.iter().map(|(_, amount)| *amount).sum();
    output.push_str(&separator(48));
    output.push('\n');
    output.push_str(&format!("{:33} {:>14}\n", "Total", total.format_with_symbol(symbol)));

    output
}

/// The category list of every kind
pub fn format_taxonomy(taxonomy: &Taxonomy) -> String {
    let mut output = String::new();
    for kind in Kind::ALL {
        output.push_str(&format!("{}\n", kind));
        for category in taxonomy.categories(kind) {
            output.push_str(&format!("  {}\n", category));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetMap, Entry};
    use crate::reports::{Aggregator, Reconciler};

    fn january() -> MonthKey {
        MonthKey::parse("2026-01").unwrap()
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(80.0), "80%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(-5.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_format_bar_fraction() {
        let filled = |bar: &str| bar.chars().filter(|c| *c == '█').count();
        assert_eq!(filled(&format_bar_fraction(0.5, 10)), 5);
        assert_eq!(filled(&format_bar_fraction(0.25, 8)), 2);
        assert_eq!(filled(&format_bar_fraction(1.5, 4)), 4);
        assert_eq!(format_bar_fraction(-0.5, 3), "   ");
        assert_eq!(format_bar_fraction(f64::NAN, 3), "   ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Épargne logement", 8), "Éparg...");
    }

    #[test]
    fn test_month_stats() {
        let mut row = MonthRow::zero(january());
        row.income = Money::from_units(1000);
        row.net = Money::from_units(1000);

        let output = format_month_stats(&row, "$");
        assert!(output.contains("January 2026"));
        assert!(output.contains("$1000.00"));
        assert!(output.contains("Net"));
    }

    #[test]
    fn test_budget_comparison_marks_over_and_under() {
        let entries = vec![
            Entry::new("2026-01-10", Kind::Expenses, "Rent", Money::from_units(400)),
            Entry::new("2026-01-12", Kind::Savings, "Home", Money::from_units(50)),
        ];
        let mut budget = BudgetMap::new();
        budget.set(
            BudgetKey::new(january(), Kind::Expenses, "Rent"),
            Money::from_units(500),
        );
        let taxonomy = Taxonomy::default();
        let reconciler = Reconciler::new(Aggregator::new(&entries, &budget, &taxonomy));

        let output = format_budget_comparison(&reconciler.budget_vs_tracked(&january()), "$");
        assert!(output.contains("$100.00 under"));
        assert!(output.contains("-$50.00 over"));

        let breakdown = reconciler.category_breakdown(&january(), Kind::Expenses);
        let output = format_category_breakdown(&january(), Kind::Expenses, &breakdown, "$");
        assert!(output.contains("Rent"));
        assert!(output.contains("80%"));
        assert!(!output.contains("Groceries"));
    }

    #[test]
    fn test_top_categories() {
        let totals = vec![
            CategoryTotal {
                category: "Rent".into(),
                total: Money::from_units(400),
            },
            CategoryTotal {
                category: "Groceries".into(),
                total: Money::from_units(100),
            },
        ];
        let output = format_top_categories(&january(), Kind::Expenses, &totals, "$");
        assert!(output.contains(" 1. Rent"));
        assert!(output.contains(" 2. Groceries"));

        let empty = format_top_categories(&january(), Kind::Expenses, &[], "$");
        assert!(empty.contains("No entries"));
    }

    #[test]
    fn test_chart() {
        let chart = ChartData::prepare(
            vec!["2026-01".into()],
            vec![
                ("Income".into(), vec![1000.0]),
                ("Expenses".into(), vec![500.0]),
            ],
            4,
        );
        let output = format_chart(&chart);
        assert!(output.contains("Scale: 1000 | 750 | 500 | 250 | 0"));
        assert!(output.contains("2026-01"));
        assert_eq!(
            output.lines().filter(|l| l.contains("Income")).count(),
            1
        );

        let empty = ChartData::prepare(Vec::new(), Vec::new(), 4);
        assert!(format_chart(&empty).contains("No entries"));
    }

    #[test]
    fn test_chart_bars_follow_prepared_fractions() {
        let mut chart = ChartData::prepare(
            vec!["2026-01".into()],
            vec![("Income".into(), vec![1000.0]), ("Expenses".into(), vec![500.0])],
            4,
        );
        let filled = |output: &str, name: &str| {
            output
                .lines()
                .find(|l| l.contains(name))
                .map(|l| l.chars().filter(|c| *c == '█').count())
                .unwrap_or(0)
        };

        let output = format_chart(&chart);
        assert_eq!(filled(&output, "Income"), BAR_WIDTH);
        assert_eq!(filled(&output, "Expenses"), BAR_WIDTH / 2);

        chart.series[1].fractions[0] = 0.1;
        let output = format_chart(&chart);
        assert_eq!(filled(&output, "Expenses"), 3);
    }

    #[test]
    fn test_allocations_and_taxonomy() {
        let allocations = vec![
            (
                BudgetKey::new(january(), Kind::Expenses, "Rent"),
                Money::from_units(500),
            ),
            (
                BudgetKey::new(january(), Kind::Expenses, "Groceries"),
                Money::from_units(100),
            ),
        ];
        let output = format_budget_allocations(&january(), &allocations, "$");
        assert!(output.contains("$600.00"));
        assert!(format_budget_allocations(&january(), &[], "$").contains("No allocations"));

        let taxonomy = format_taxonomy(&Taxonomy::default());
        assert!(taxonomy.contains("Expenses\n"));
        assert!(taxonomy.contains("  Emergency Fund\n"));
    }
}
