//! Configuration module for Ledgerbook
//!
//! This module provides configuration management including:
//! - Base and data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
