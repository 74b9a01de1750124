//! Budget limits repository for JSON storage
//!
//! Manages loading and saving the user's budget limits to limits.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpensioError;
use crate::models::BudgetLimits;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the single budget limits record
pub struct LimitsRepository {
    path: PathBuf,
    data: RwLock<BudgetLimits>,
}

impl LimitsRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BudgetLimits::default()),
        }
    }

    pub fn load(&self) -> Result<(), ExpensioError> {
        let limits: BudgetLimits = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = limits;
        Ok(())
    }

    pub fn save(&self) -> Result<(), ExpensioError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    pub fn get(&self) -> Result<BudgetLimits, ExpensioError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    pub fn set(&self, limits: BudgetLimits) -> Result<(), ExpensioError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = limits;
        Ok(())
    }
}
