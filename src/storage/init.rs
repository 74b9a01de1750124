//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::ExpensioPaths;
use crate::error::ExpensioError;
use crate::models::{Category, DEFAULT_CATEGORY_NAMES};

use super::categories::CategoryData;
use super::file_io::{read_json, write_json_atomic};

/// Initialize storage for a fresh installation
///
/// Seeds the default categories when none exist yet. Existing user
/// categories are kept.
pub fn initialize_storage(paths: &ExpensioPaths) -> Result<(), ExpensioError> {
    paths.ensure_directories()?;

    let mut data: CategoryData = read_json(paths.categories_file())?;
    if data.defaults.is_empty() {
        data.defaults = default_categories();
        write_json_atomic(paths.categories_file(), &data)?;
        tracing::info!(count = data.defaults.len(), "seeded default categories");
    }

    Ok(())
}

/// Build the built-in category list
fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORY_NAMES
        .iter()
        .map(|name| Category::builtin(*name))
        .collect()
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &ExpensioPaths) -> bool {
    !paths.is_initialized()
}
