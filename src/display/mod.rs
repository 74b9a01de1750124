//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, categories and budget limits
//! for terminal display.

pub mod category;
pub mod expense;
pub mod limits;

pub use category::format_category_list;
pub use expense::{format_expense_details, format_expense_table};
pub use limits::{format_breach_prompt, format_limits};
