//! User settings for Ledgerbook
//!
//! Display preferences, report defaults and category list overrides, stored
//! as `config.json` in the base directory. Every field has a default, so a
//! partial or missing file is fine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::{Kind, Taxonomy};
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for Ledgerbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of tick intervals on chart scales
    #[serde(default = "default_chart_steps")]
    pub chart_steps: usize,

    /// Default length of top-category rankings
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,

    /// Replacement category lists for individual kinds
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<Kind, Vec<String>>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_chart_steps() -> usize {
    4
}

fn default_top_limit() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            chart_steps: default_chart_steps(),
            top_limit: default_top_limit(),
            categories: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        read_json(paths.settings_file())
            .map_err(|e| LedgerError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// The category table in effect
    pub fn taxonomy(&self) -> Taxonomy {
        Taxonomy::with_overrides(&self.categories)
    }
}
