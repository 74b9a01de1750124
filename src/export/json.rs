//! JSON Export functionality

use std::io::Write;

use crate::error::{ExpensioError, ExpensioResult};
use crate::reports::TransactionReport;

/// Export a transaction report to JSON
///
/// Amounts are written in cents, as they are stored.
pub fn export_report_json<W: Write>(
    report: &TransactionReport,
    writer: W,
    pretty: bool,
) -> ExpensioResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, report)
    } else {
        serde_json::to_writer(writer, report)
    }
    .map_err(|e| ExpensioError::Export(e.to_string()))?;

    Ok(())
}
