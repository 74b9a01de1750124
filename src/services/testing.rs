//! In-memory backend for service tests

use std::cell::{Cell, RefCell};

use crate::backend::Backend;
use crate::error::{ExpensioError, ExpensioResult};
use crate::models::{BudgetLimits, Category, Expense, ExpenseId, NewExpense};

pub struct MockBackend {
    limits: RefCell<BudgetLimits>,
    user: RefCell<Vec<Category>>,
    defaults: Vec<Category>,
    expenses: RefCell<Vec<Expense>>,
    settings_calls: Cell<usize>,
    category_calls: Cell<usize>,
    failing: Cell<bool>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            limits: RefCell::new(BudgetLimits::default()),
            user: RefCell::new(Vec::new()),
            defaults: ["Food", "Transport", "Other"]
                .into_iter()
                .map(|name| Category::builtin(name))
                .collect(),
            expenses: RefCell::new(Vec::new()),
            settings_calls: Cell::new(0),
            category_calls: Cell::new(0),
            failing: Cell::new(false),
        }
    }
}

impl MockBackend {
    pub fn with_limits(limits: BudgetLimits) -> Self {
        let backend = Self::default();
        backend.set_limits(limits);
        backend
    }

    pub fn set_limits(&self, limits: BudgetLimits) {
        *self.limits.borrow_mut() = limits;
    }

    pub fn add_user_category(&self, name: &str) -> Category {
        let category = Category::new(name);
        self.user.borrow_mut().push(category.clone());
        category
    }

    /// Make every create/update fail until switched back
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn expenses(&self) -> Vec<Expense> {
        self.expenses.borrow().clone()
    }

    pub fn settings_calls(&self) -> usize {
        self.settings_calls.get()
    }

    pub fn category_calls(&self) -> usize {
        self.category_calls.get()
    }

    fn check_failing(&self) -> ExpensioResult<()> {
        if self.failing.get() {
            Err(ExpensioError::Backend("service unavailable".into()))
        } else {
            Ok(())
        }
    }
}

impl Backend for MockBackend {
    fn fetch_user_categories(&self) -> ExpensioResult<Vec<Category>> {
        self.category_calls.set(self.category_calls.get() + 1);
        Ok(self.user.borrow().clone())
    }

    fn fetch_default_categories(&self) -> ExpensioResult<Vec<Category>> {
        Ok(self.defaults.clone())
    }

    fn fetch_settings(&self) -> ExpensioResult<BudgetLimits> {
        self.settings_calls.set(self.settings_calls.get() + 1);
        Ok(self.limits.borrow().clone())
    }

    fn create_expense(&self, expense: NewExpense) -> ExpensioResult<Expense> {
        self.check_failing()?;
        let expense = Expense::from_new(expense);
        self.expenses.borrow_mut().push(expense.clone());
        Ok(expense)
    }

    fn update_expense(&self, id: ExpenseId, input: NewExpense) -> ExpensioResult<Expense> {
        self.check_failing()?;
        let mut expenses = self.expenses.borrow_mut();
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ExpensioError::expense_not_found(id.to_string()))?;
        expense.apply(input);
        Ok(expense.clone())
    }

    fn list_expenses(&self) -> ExpensioResult<Vec<Expense>> {
        Ok(self.expenses.borrow().clone())
    }
}
