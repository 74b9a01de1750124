//! Configuration module for Expensio
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - Client settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensioPaths;
pub use settings::Settings;
