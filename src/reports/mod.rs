//! Reports module for Expensio
//!
//! Builds the printable transaction report from the filtered expense list.

pub mod transactions;

pub use transactions::{ReportRow, TransactionReport, MISSING_CATEGORY};
