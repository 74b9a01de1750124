//! Custom error types for Expensio
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

/// The main error type for Expensio operations
#[derive(Error, Debug)]
pub enum ExpensioError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// One or more expense form fields failed validation
    #[error("Invalid expense: {0}")]
    InvalidForm(FormErrors),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The persistence collaborator rejected or failed a request
    #[error("Backend error: {0}")]
    Backend(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpensioError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error (model or form level)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidForm(_))
    }
}

/// Per-field validation messages for the expense form
///
/// Each field holds at most one message, mirroring how the form shows a
/// single inline error under each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub note: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl FormErrors {
    /// True when no field has an error
    pub fn is_empty(&self) -> bool {
        self.note.is_none() && self.amount.is_none() && self.category.is_none() && self.date.is_none()
    }

    /// All messages in field order
    pub fn messages(&self) -> Vec<&str> {
        [&self.note, &self.amount, &self.category, &self.date]
            .into_iter()
            .filter_map(|m| m.as_deref())
            .collect()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpensioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpensioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<FormErrors> for ExpensioError {
    fn from(errors: FormErrors) -> Self {
        Self::InvalidForm(errors)
    }
}

/// Result type alias for Expensio operations
pub type ExpensioResult<T> = Result<T, ExpensioError>;
