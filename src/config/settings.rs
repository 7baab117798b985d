//! User settings for the expense tracker
//!
//! Presentation preferences and the goals a new session starts with. Expense
//! data itself is never written here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Goals, Money, DEFAULT_CURRENCY_SYMBOL};
use crate::models::goals::{DEFAULT_MONTHLY_BUDGET, DEFAULT_SAVINGS_TARGET};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to displayed amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display and input (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Monthly budget a new session starts with
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,

    /// Savings target a new session starts with
    #[serde(default = "default_savings_target")]
    pub savings_target: Money,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_monthly_budget() -> Money {
    Money::from_whole(DEFAULT_MONTHLY_BUDGET)
}

fn default_savings_target() -> Money {
    Money::from_whole(DEFAULT_SAVINGS_TARGET)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            monthly_budget: default_monthly_budget(),
            savings_target: default_savings_target(),
        }
    }
}

impl Settings {
    /// Initial goals described by these settings
    pub fn goals(&self) -> TrackerResult<Goals> {
        Goals::new(self.monthly_budget, self.savings_target)
            .map_err(|e| TrackerError::Config(format!("Invalid goals in settings: {}", e)))
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            debug!(path = %settings_path.display(), "settings loaded");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            TrackerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
