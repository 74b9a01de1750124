//! Category repository for JSON storage
//!
//! Manages loading and saving the user and default category lists to
//! categories.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpensioError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    #[serde(default)]
    pub user: Vec<Category>,
    #[serde(default)]
    pub defaults: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<CategoryData>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(CategoryData::default()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), ExpensioError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data;
        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), ExpensioError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Categories the user created, in creation order
    pub fn get_user(&self) -> Result<Vec<Category>, ExpensioError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.user.clone())
    }

    pub fn get_defaults(&self) -> Result<Vec<Category>, ExpensioError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.defaults.clone())
    }

    /// Look a category up by id in either list
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, ExpensioError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .user
            .iter()
            .chain(data.defaults.iter())
            .find(|c| c.id == id)
            .cloned())
    }

    /// Get a user category by name (case-insensitive)
    pub fn get_user_by_name(&self, name: &str) -> Result<Option<Category>, ExpensioError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .user
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    pub fn push_user(&self, category: Category) -> Result<(), ExpensioError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.user.push(category);
        Ok(())
    }

    /// Replace the default list wholesale
    pub fn set_defaults(&self, defaults: Vec<Category>) -> Result<(), ExpensioError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.defaults = defaults;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_user_and_default_lists_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");

        let repo = CategoryRepository::new(path.clone());
        repo.set_defaults(vec![Category::builtin("Food")]).unwrap();
        let pets = Category::new("Pets");
        repo.push_user(pets.clone()).unwrap();
        repo.save().unwrap();

        let reloaded = CategoryRepository::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.get_user().unwrap(), vec![pets.clone()]);
        assert_eq!(reloaded.get_defaults().unwrap()[0].name, "Food");
        assert_eq!(reloaded.get(pets.id).unwrap(), Some(pets));
    }

    #[test]
    fn test_user_lookup_ignores_case() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));
        repo.push_user(Category::new("Pets")).unwrap();

        assert!(repo.get_user_by_name("pets").unwrap().is_some());
        assert!(repo.get_user_by_name("Food").unwrap().is_none());
    }
}
