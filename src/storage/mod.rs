//! Storage layer for Expensio
//!
//! A local stand-in for the persistence collaborator: JSON files with atomic
//! writes, exposed through the [`Backend`] trait so the services cannot tell
//! it apart from a remote API.

pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod init;
pub mod limits;

pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use limits::LimitsRepository;

use crate::audit::{AuditEntry, AuditLog};
use crate::backend::Backend;
use crate::config::paths::ExpensioPaths;
use crate::error::{ExpensioError, ExpensioResult};
use crate::models::{BudgetLimits, Category, CategoryId, Expense, ExpenseId, NewExpense};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: ExpensioPaths,
    pub expenses: ExpenseRepository,
    pub categories: CategoryRepository,
    pub limits: LimitsRepository,
    audit: AuditLog,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensioPaths) -> ExpensioResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            limits: LimitsRepository::new(paths.limits_file()),
            audit: AuditLog::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &ExpensioPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> ExpensioResult<()> {
        self.expenses.load()?;
        self.categories.load()?;
        self.limits.load()?;
        Ok(())
    }

    /// Create a user category
    ///
    /// Names must be unique among the user's own categories. Sharing a name
    /// with a default category is allowed; the user's one shadows it.
    pub fn add_user_category(&self, name: &str) -> ExpensioResult<Category> {
        let category = Category::new(name.trim());
        category
            .validate()
            .map_err(|e| ExpensioError::Validation(e.to_string()))?;

        if self.categories.get_user_by_name(&category.name)?.is_some() {
            return Err(ExpensioError::Duplicate {
                entity_type: "Category",
                identifier: category.name,
            });
        }

        self.categories.push_user(category.clone())?;
        self.categories.save()?;

        self.audit.append(&AuditEntry::category_created(&category))?;

        tracing::info!(name = %category.name, "created category");
        Ok(category)
    }

    /// Replace the budget limits
    pub fn update_limits(&self, limits: BudgetLimits) -> ExpensioResult<BudgetLimits> {
        limits
            .validate()
            .map_err(|e| ExpensioError::Validation(e.to_string()))?;

        let before = self.limits.get()?;
        self.limits.set(limits.clone())?;
        self.limits.save()?;

        self.audit.append(&AuditEntry::limits_updated(&before, &limits))?;

        tracing::info!("updated budget limits");
        Ok(limits)
    }

    fn ensure_category_exists(&self, id: CategoryId) -> ExpensioResult<()> {
        self.categories
            .get(id)?
            .map(|_| ())
            .ok_or_else(|| ExpensioError::category_not_found(id.to_string()))
    }
}

impl Backend for Storage {
    fn fetch_user_categories(&self) -> ExpensioResult<Vec<Category>> {
        self.categories.get_user()
    }

    fn fetch_default_categories(&self) -> ExpensioResult<Vec<Category>> {
        self.categories.get_defaults()
    }

    fn fetch_settings(&self) -> ExpensioResult<BudgetLimits> {
        self.limits.get()
    }

    fn create_expense(&self, input: NewExpense) -> ExpensioResult<Expense> {
        input
            .validate()
            .map_err(|e| ExpensioError::Validation(e.to_string()))?;
        self.ensure_category_exists(input.category_id)?;

        let expense = Expense::from_new(input);

        self.expenses.upsert(expense.clone())?;
        self.expenses.save()?;

        self.audit.append(&AuditEntry::expense_created(&expense))?;

        tracing::info!(id = %expense.id, amount = %expense.amount, "created expense");
        Ok(expense)
    }

    fn update_expense(&self, id: ExpenseId, input: NewExpense) -> ExpensioResult<Expense> {
        let mut expense = self
            .expenses
            .get(id)?
            .ok_or_else(|| ExpensioError::expense_not_found(id.to_string()))?;

        input
            .validate()
            .map_err(|e| ExpensioError::Validation(e.to_string()))?;
        self.ensure_category_exists(input.category_id)?;

        let before = expense.clone();
        expense.apply(input);

        self.expenses.upsert(expense.clone())?;
        self.expenses.save()?;

        self.audit.append(&AuditEntry::expense_updated(&before, &expense))?;

        tracing::info!(id = %expense.id, amount = %expense.amount, "updated expense");
        Ok(expense)
    }

    fn list_expenses(&self) -> ExpensioResult<Vec<Expense>> {
        self.expenses.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Action;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensioPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn first_default(storage: &Storage) -> Category {
        storage.fetch_default_categories().unwrap().remove(0)
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensioPaths::with_base_dir(temp_dir.path().to_path_buf());
        let _storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
    }

    #[test]
    fn test_create_and_update_expense() {
        let (_temp, storage) = create_test_storage();
        let category = first_default(&storage);
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let created = storage
            .create_expense(NewExpense::new("Lunch", Money::from_units(12, 0), category.id, date))
            .unwrap();
        assert_eq!(storage.list_expenses().unwrap().len(), 1);

        let updated = storage
            .update_expense(
                created.id,
                NewExpense::new("Lunch", Money::from_units(15, 0), category.id, date),
            )
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.amount, Money::from_units(15, 0));

        let log = storage.audit().entries().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].action, Action::Updated);
        assert_eq!(log[1].changes, vec!["amount: 1200 -> 1500".to_string()]);
    }

    #[test]
    fn test_create_rejects_unknown_category() {
        let (_temp, storage) = create_test_storage();
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let err = storage
            .create_expense(NewExpense::new("Lunch", Money::from_units(12, 0), CategoryId::new(), date))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(storage.list_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_update_missing_expense() {
        let (_temp, storage) = create_test_storage();
        let category = first_default(&storage);
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let err = storage
            .update_expense(
                ExpenseId::new(),
                NewExpense::new("Lunch", Money::from_units(1, 0), category.id, date),
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_user_category_duplicates() {
        let (_temp, storage) = create_test_storage();

        // Shadowing a default name is fine
        storage.add_user_category("Food").unwrap();

        let err = storage.add_user_category("food").unwrap_err();
        assert!(matches!(err, ExpensioError::Duplicate { .. }));
        assert!(storage.add_user_category("  ").unwrap_err().is_validation());
    }

    #[test]
    fn test_update_limits_validates() {
        let (_temp, storage) = create_test_storage();

        let bad = BudgetLimits {
            daily_limit: Some(Money::from_cents(-100)),
            ..Default::default()
        };
        assert!(storage.update_limits(bad).unwrap_err().is_validation());

        let good = BudgetLimits {
            daily_limit: Some(Money::from_units(100, 0)),
            currency: Some("USD".into()),
            ..Default::default()
        };
        storage.update_limits(good.clone()).unwrap();
        assert_eq!(storage.fetch_settings().unwrap(), good);
    }
}
