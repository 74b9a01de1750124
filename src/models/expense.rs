//! Expense model
//!
//! An expense is owned by the persistence collaborator: the client builds a
//! [`NewExpense`] from validated form input and receives a committed
//! [`Expense`] back, with its id and timestamps filled in.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// The fields a client submits when creating or updating an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub note: String,
    pub amount: Money,
    pub category_id: CategoryId,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(
        note: impl Into<String>,
        amount: Money,
        category_id: CategoryId,
        date: NaiveDate,
    ) -> Self {
        Self {
            note: note.into(),
            amount,
            category_id,
            date,
        }
    }

    /// Validate the fields a backend must refuse
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.note.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyNote);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

/// A committed expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,

    /// Free-text description shown as "Description" in lists and reports
    pub note: String,

    /// Amount spent (always positive)
    pub amount: Money,

    pub category_id: CategoryId,

    /// Calendar date the money was spent
    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Commit a new expense, assigning a fresh id
    pub fn from_new(input: NewExpense) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            note: input.note,
            amount: input.amount,
            category_id: input.category_id,
            date: input.date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields with `input`
    pub fn apply(&mut self, input: NewExpense) {
        self.note = input.note;
        self.amount = input.amount;
        self.category_id = input.category_id;
        self.date = input.date;
        self.updated_at = Utc::now();
    }

    /// The editable fields of this expense
    pub fn to_new(&self) -> NewExpense {
        NewExpense {
            note: self.note.clone(),
            amount: self.amount,
            category_id: self.category_id,
            date: self.date,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date.format("%Y-%m-%d"), self.note, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyNote,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNote => write!(f, "Expense note cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
