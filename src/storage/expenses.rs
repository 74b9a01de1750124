//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpensioError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), ExpensioError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            ExpensioError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        tracing::debug!(count = data.len(), "loaded expenses");
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), ExpensioError> {
        let expenses = self.get_all()?;
        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpensioError> {
        let data = self.data.read().map_err(|e| {
            ExpensioError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// All expenses, newest date first (ties broken by creation time)
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpensioError> {
        let data = self.data.read().map_err(|e| {
            ExpensioError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(expenses)
    }

    /// Insert or replace an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), ExpensioError> {
        let mut data = self.data.write().map_err(|e| {
            ExpensioError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(expense.id, expense);
        Ok(())
    }

    pub fn count(&self) -> Result<usize, ExpensioError> {
        let data = self.data.read().map_err(|e| {
            ExpensioError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, NewExpense};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expense_on(day: u32, note: &str) -> Expense {
        Expense::from_new(NewExpense::new(
            note,
            Money::from_units(10, 0),
            CategoryId::new(),
            NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
        ))
    }

    #[test]
    fn test_get_all_sorted_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));

        repo.upsert(expense_on(3, "early")).unwrap();
        repo.upsert(expense_on(12, "late")).unwrap();
        repo.upsert(expense_on(7, "middle")).unwrap();

        let notes: Vec<_> = repo.get_all().unwrap().into_iter().map(|e| e.note).collect();
        assert_eq!(notes, vec!["late", "middle", "early"]);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let repo = ExpenseRepository::new(path.clone());
        let expense = expense_on(5, "Books");
        let id = expense.id;
        repo.upsert(expense).unwrap();
        repo.save().unwrap();

        let reloaded = ExpenseRepository::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 1);
        assert_eq!(reloaded.get(id).unwrap().unwrap().note, "Books");
    }
}
