//! CLI commands for reports
//!
//! Every report reads one `LedgerView`, so all numbers in a single report
//! come from the same snapshot.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_budget_comparison, format_category_breakdown, format_chart, format_month_stats,
    format_monthly_series, format_top_categories,
};
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_budget_comparison, export_monthly_series};
use crate::models::{Kind, MonthKey};
use crate::services::Ledger;

use super::entry::parse_kind;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Month-by-month totals for every month with entries
    Series {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Totals of a single month
    Month {
        /// Month (YYYY-MM)
        month: String,
    },

    /// Budget vs tracked for a month
    Budget {
        /// Month (YYYY-MM)
        month: String,

        /// Also show the per-category breakdown
        #[arg(short, long)]
        categories: bool,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Largest categories of a kind in a month
    Top {
        /// Month (YYYY-MM)
        month: String,

        /// Income, Expenses, Savings or Investments
        kind: String,

        /// Number of categories to show (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Bar chart of the monthly series
    Chart {
        /// Number of scale intervals (defaults to the configured value)
        #[arg(short, long)]
        steps: Option<usize>,
    },
}

fn create_output(path: &Path) -> LedgerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle report commands
pub fn handle_report_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let view = ledger.view()?;
    let reconciler = view.reconciler();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Series { output } => {
            let series = reconciler.monthly_series();
            if let Some(path) = output {
                let count = export_monthly_series(series, create_output(&path)?)?;
                println!("Exported {} months to: {}", count, path.display());
            } else {
                print!("{}", format_monthly_series(series, symbol));
            }
        }

        ReportCommands::Month { month } => {
            let month = MonthKey::parse(&month)?;
            let row = reconciler.selected_month_stats(&month);
            print!("{}", format_month_stats(&row, symbol));
        }

        ReportCommands::Budget {
            month,
            categories,
            output,
        } => {
            let month = MonthKey::parse(&month)?;
            let comparison = reconciler.budget_vs_tracked(&month);

            if let Some(path) = output {
                export_budget_comparison(&comparison, create_output(&path)?)?;
                println!("Budget report exported to: {}", path.display());
            } else {
                print!("{}", format_budget_comparison(&comparison, symbol));
                if categories {
                    for kind in Kind::ALL {
                        let rows = reconciler.category_breakdown(&month, kind);
                        print!("{}", format_category_breakdown(&month, kind, &rows, symbol));
                    }
                }
            }
        }

        ReportCommands::Top { month, kind, limit } => {
            let month = MonthKey::parse(&month)?;
            let kind = parse_kind(&kind)?;
            let limit = limit.unwrap_or(settings.top_limit);
            let totals = reconciler.top_categories(&month, kind, limit);
            print!("{}", format_top_categories(&month, kind, &totals, symbol));
        }

        ReportCommands::Chart { steps } => {
            let chart = view.monthly_chart(steps.unwrap_or(settings.chart_steps));
            print!("{}", format_chart(&chart));
        }
    }

    Ok(())
}
