use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::analytics::{TimeWindow, RECENT_LIMIT};
use crate::models::ExchangeRateTable;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Currency the ledger amounts are stored in.
    pub base_currency: String,
    pub display_currency: String,
    pub recent_limit: usize,
    /// JSON object of quotes, e.g. `{"INRUSD": 0.012}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates_file: Option<PathBuf>,
    pub trend_window: TimeWindow,
    pub income_window: TimeWindow,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_currency: "INR".into(),
            display_currency: "INR".into(),
            recent_limit: RECENT_LIMIT,
            rates_file: None,
            trend_window: TimeWindow::Monthly,
            income_window: TimeWindow::Yearly,
        }
    }
}

impl Config {
    /// Read the config at `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&data)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    /// Load the quote table named by `rates_file`, or an empty table.
    pub fn load_rates(&self) -> Result<ExchangeRateTable> {
        match &self.rates_file {
            Some(path) => load_rates(path),
            None => Ok(ExchangeRateTable::new()),
        }
    }
}

pub fn load_rates(path: &Path) -> Result<ExchangeRateTable> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rates file: {}", path.display()))?;
    let table: ExchangeRateTable = serde_json::from_str(&data)
        .with_context(|| format!("Invalid rates file: {}", path.display()))?;
    debug!(path = %path.display(), quotes = table.len(), "exchange rates loaded");
    Ok(table)
}

pub fn default_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "ledgerlens", "LedgerLens")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(proj_dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
