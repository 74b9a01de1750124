//! User settings for Expensio
//!
//! Manages client preferences: how the weekly budget window is computed,
//! how many transactions the list shows, and the date format used for display.

use serde::{Deserialize, Serialize};

use super::paths::ExpensioPaths;
use crate::error::ExpensioError;
use crate::models::WeekWindow;

/// User settings for Expensio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How the "same week" budget window is bounded
    #[serde(default)]
    pub week_window: WeekWindow,

    /// Rows visible after the transaction filter changes
    #[serde(default = "default_visible_rows")]
    pub visible_rows: usize,

    /// Rows revealed by each "see more"
    #[serde(default = "default_see_more_step")]
    pub see_more_step: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_visible_rows() -> usize {
    5
}

fn default_see_more_step() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            week_window: WeekWindow::default(),
            visible_rows: default_visible_rows(),
            see_more_step: default_see_more_step(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensioPaths) -> Result<Self, ExpensioError> {
        let settings_path = paths.config_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpensioError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpensioError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensioPaths) -> Result<(), ExpensioError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpensioError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.config_file(), contents).map_err(|e| {
            ExpensioError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
