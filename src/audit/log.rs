use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::error::{ExpensioError, ExpensioResult};

use super::entry::{AuditEntry, Subject};

/// Append-only JSONL audit file
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn append(&self, entry: &AuditEntry) -> ExpensioResult<()> {
        let line = serde_json::to_string(entry)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ExpensioError::Io(format!("Failed to open audit log: {}", e)))?;
        writeln!(file, "{}", line)?;
        file.flush()?;

        tracing::debug!(subject = ?entry.subject, id = %entry.id, "audit entry written");
        Ok(())
    }

    /// Every readable entry, oldest first
    ///
    /// A line that does not parse (a torn write, say) is skipped with a
    /// warning so one bad line never hides the rest of the history.
    pub fn entries(&self) -> ExpensioResult<Vec<AuditEntry>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ExpensioError::Io(format!("Failed to read audit log: {}", e))),
        };

        Ok(text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(index, line)| match serde_json::from_str(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(line = index + 1, error = %e, "skipping unreadable audit entry");
                    None
                }
            })
            .collect())
    }

    /// The last `count` entries, optionally only those about `subject`
    pub fn recent(&self, count: usize, subject: Option<Subject>) -> ExpensioResult<Vec<AuditEntry>> {
        let mut entries: Vec<_> = self
            .entries()?
            .into_iter()
            .filter(|entry| subject.map_or(true, |s| entry.subject == s))
            .collect();
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }
}
