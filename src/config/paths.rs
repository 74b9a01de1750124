//! Path management for Expensio
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSIO_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/expensio` on Linux, `~/Library/Application Support/expensio`
//!    on macOS, `%APPDATA%\expensio` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpensioError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSIO_DATA_DIR";

/// Manages all paths used by Expensio
#[derive(Debug, Clone)]
pub struct ExpensioPaths {
    base_dir: PathBuf,
}

impl ExpensioPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ExpensioError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensioPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the application config file
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to categories.json (user and default categories)
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Get the path to limits.json (budget limits and currency)
    pub fn limits_file(&self) -> PathBuf {
        self.data_dir().join("limits.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpensioError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpensioError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ExpensioError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Expensio has been initialized (category file exists)
    pub fn is_initialized(&self) -> bool {
        self.categories_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpensioError> {
    ProjectDirs::from("", "", "expensio")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ExpensioError::Config("Could not determine home directory".into()))
}
