//! Ledgerbook - personal ledger with monthly budgets and reconciliation
//!
//! Records income, expenses, savings and investments as dated entries, keeps
//! planned amounts per month and category, and derives monthly totals,
//! budget-vs-tracked variances, category rankings and chart data from them.
//!
//! # Architecture
//!
//! - `models`: entries, kinds, months, money, budget allocations, taxonomy
//! - `storage`: snapshot repositories over a key-value blob store
//! - `reports`: aggregator, reconciler and chart preparation
//! - `services`: validated mutations and the `Ledger` shell
//! - `export`: JSON entry dumps and CSV report tables
//! - `audit`: append-only log of every mutation
//! - `display`, `cli`: terminal front end
//! - `config`, `error`, `logging`: ambient concerns
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgerbook::config::{LedgerPaths, Settings};
//! use ledgerbook::services::Ledger;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let ledger = Ledger::open(&paths, &settings)?;
//! let view = ledger.view()?;
//! for row in view.reconciler().monthly_series() {
//!     println!("{} net {}", row.month, row.net);
//! }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
