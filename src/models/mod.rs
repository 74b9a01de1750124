//! Core data models for Expensio
//!
//! This module contains the data structures of the expense domain:
//! expenses, categories, money amounts and budget limits.

pub mod category;
pub mod expense;
pub mod ids;
pub mod limits;
pub mod money;

pub use category::{Category, CategorySource, DEFAULT_CATEGORY_NAMES};
pub use expense::{Expense, NewExpense};
pub use ids::{CategoryId, ExpenseId};
pub use limits::{BudgetLimits, LimitEvaluation, LimitType, WeekWindow};
pub use money::{Money, MoneyParseError};
