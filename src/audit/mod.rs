//! Audit trail of saved expenses, categories and budget limits
//!
//! Entries are appended to a JSONL file next to the data. `expensio audit`
//! prints the most recent ones.

mod diff;
mod entry;
mod log;

pub use diff::changed_fields;
pub use entry::{Action, AuditEntry, Subject};
pub use log::AuditLog;
