//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod expense;
pub mod limits;
pub mod report;
pub mod transactions;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use limits::{handle_limits_command, LimitCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transactions::{handle_transaction_command, FilterArgs, TransactionCommands};
