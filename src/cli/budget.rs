//! Budget CLI commands
//!
//! Setting and showing planned amounts per month, kind and category.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_allocations;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetKey, Money, MonthKey};
use crate::services::Ledger;

use super::entry::parse_kind;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the planned amount for a category in a month
    Set {
        /// Month (YYYY-MM)
        month: String,
        /// Income, Expenses, Savings or Investments
        kind: String,
        /// Category name
        category: String,
        /// Planned amount; 0 clears the plan
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the allocations of a month
    Show {
        /// Month (YYYY-MM), defaults to the current month
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set {
            month,
            kind,
            category,
            amount,
        } => {
            let month = MonthKey::parse(&month)?;
            let kind = parse_kind(&kind)?;
            let category = category.trim();
            if category.is_empty() {
                return Err(LedgerError::Validation("Category is required".into()));
            }
            let amount = Money::parse(&amount)
                .map_err(|e| LedgerError::Validation(format!("Invalid amount: {}", e)))?;

            if !ledger.taxonomy().contains(kind, category) {
                println!(
                    "Note: '{}' is not a listed {} category; it will not count toward month totals.",
                    category, kind
                );
            }

            let key = BudgetKey::new(month, kind, category);
            let previous = ledger.budgets().set(key.clone(), amount)?;
            println!(
                "Budget {} set to {} (was {})",
                key,
                amount.format_with_symbol(symbol),
                previous.format_with_symbol(symbol)
            );
        }

        BudgetCommands::Show { month } => {
            let month = match month {
                Some(m) => MonthKey::parse(&m)?,
                None => MonthKey::current(),
            };
            let allocations = ledger.budgets().list_month(&month)?;
            print!("{}", format_budget_allocations(&month, &allocations, symbol));
        }
    }

    Ok(())
}
