//! The persistence collaborator
//!
//! Expenses, categories and budget limits live behind a [`Backend`]. The
//! client core never stores anything itself; it fetches through this trait,
//! evaluates locally, and commits through it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ExpensioResult;
use crate::models::{BudgetLimits, Category, Expense, ExpenseId, NewExpense};

/// Operations the core needs from whatever stores the user's data
///
/// Calls are made one at a time and are not cancelled once issued.
pub trait Backend {
    /// Categories the user created
    fn fetch_user_categories(&self) -> ExpensioResult<Vec<Category>>;

    /// Built-in categories available to every user
    fn fetch_default_categories(&self) -> ExpensioResult<Vec<Category>>;

    /// The user's budget limits; unset fields are `None`
    fn fetch_settings(&self) -> ExpensioResult<BudgetLimits>;

    fn create_expense(&self, expense: NewExpense) -> ExpensioResult<Expense>;

    fn update_expense(&self, id: ExpenseId, expense: NewExpense) -> ExpensioResult<Expense>;

    /// All expenses, most recent first
    fn list_expenses(&self) -> ExpensioResult<Vec<Expense>>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn fetch_user_categories(&self) -> ExpensioResult<Vec<Category>> {
        (**self).fetch_user_categories()
    }

    fn fetch_default_categories(&self) -> ExpensioResult<Vec<Category>> {
        (**self).fetch_default_categories()
    }

    fn fetch_settings(&self) -> ExpensioResult<BudgetLimits> {
        (**self).fetch_settings()
    }

    fn create_expense(&self, expense: NewExpense) -> ExpensioResult<Expense> {
        (**self).create_expense(expense)
    }

    fn update_expense(&self, id: ExpenseId, expense: NewExpense) -> ExpensioResult<Expense> {
        (**self).update_expense(id, expense)
    }

    fn list_expenses(&self) -> ExpensioResult<Vec<Expense>> {
        (**self).list_expenses()
    }
}

/// Identifies one client session for caching purposes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new("local")
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
