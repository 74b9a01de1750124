//! Expensio - expense tracking with budget limits
//!
//! This library provides the core of the Expensio expense tracker: recording
//! expenses against categories, warning before an expense breaks a daily,
//! weekly or monthly budget limit, and listing or exporting transactions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, budget limits, money)
//! - `backend`: The persistence collaborator trait
//! - `storage`: JSON file implementation of the backend
//! - `services`: Limit evaluation, session cache, expense and list services
//! - `reports`: The transaction report
//! - `export`: CSV, JSON and YAML report writers
//! - `display`: Terminal formatting
//! - `audit`: Audit logging system
//! - `cli`: Command handlers
//! - `logging`: Diagnostic log setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expensio::config::{paths::ExpensioPaths, settings::Settings};
//!
//! let paths = ExpensioPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod backend;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpensioError, ExpensioResult};
