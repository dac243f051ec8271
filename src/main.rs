use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ledgerbook::cli::{
    handle_add, handle_budget_command, handle_clear, handle_delete, handle_export,
    handle_import, handle_list, handle_report_command, AddArgs, BudgetCommands, ListArgs,
    ReportCommands,
};
use ledgerbook::config::{paths::DATA_DIR_ENV, LedgerPaths, Settings};
use ledgerbook::display::format_taxonomy;
use ledgerbook::logging::{init_tracing, LOG_ENV};
use ledgerbook::services::Ledger;

#[derive(Parser)]
#[command(
    name = "ledgerbook",
    version,
    about = "Personal ledger with monthly budgets and reconciliation reports",
    long_about = "Ledgerbook records income, expenses, savings and investments, \
                  keeps a monthly budget per category, and reports how each \
                  month tracked against its plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new entry
    Add(AddArgs),

    /// Delete an entry by ID (full or short form)
    #[command(alias = "rm")]
    Delete {
        /// Entry ID, e.g. ent-1a2b3c4d
        id: String,
    },

    /// Remove every entry
    Clear {
        /// Confirm removal
        #[arg(long)]
        yes: bool,
    },

    /// List entries, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Budget allocation commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Reports over the current entries and budget
    #[command(subcommand)]
    Report(ReportCommands),

    /// Write every entry to a JSON file
    Export {
        /// Output file path
        file: PathBuf,
    },

    /// Replace every entry with the contents of a JSON file
    Import {
        /// Input file path
        file: PathBuf,
    },

    /// Show the category list of each kind
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Ledgerbook - personal ledger with monthly budgets");
        println!();
        println!("Run 'ledgerbook --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Categories => {
            print!("{}", format_taxonomy(&settings.taxonomy()));
            return Ok(());
        }
        Commands::Config => {
            println!("Ledgerbook Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Chart steps:     {}", settings.chart_steps);
            println!("  Top limit:       {}", settings.top_limit);
            println!();
            println!("Environment: {} (base directory), {} (log filter)", DATA_DIR_ENV, LOG_ENV);
            return Ok(());
        }
        _ => {}
    }

    let ledger = Ledger::open(&paths, &settings)?;

    match command {
        Commands::Add(args) => handle_add(&ledger, &settings, args)?,
        Commands::Delete { id } => handle_delete(&ledger, &id)?,
        Commands::Clear { yes } => handle_clear(&ledger, yes)?,
        Commands::List(args) => handle_list(&ledger, &settings, args)?,
        Commands::Budget(cmd) => handle_budget_command(&ledger, &settings, cmd)?,
        Commands::Report(cmd) => handle_report_command(&ledger, &settings, cmd)?,
        Commands::Export { file } => handle_export(&ledger, &file)?,
        Commands::Import { file } => handle_import(&ledger, &file)?,
        Commands::Categories | Commands::Config => {}
    }

    Ok(())
}
