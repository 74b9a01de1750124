//! CSV Export functionality
//!
//! Writes the report rows as `Date,Description,Category,Amount`.

use std::io::Write;

use crate::error::{ExpensioError, ExpensioResult};
use crate::reports::TransactionReport;

/// Export a transaction report to CSV
pub fn export_report_csv<W: Write>(report: &TransactionReport, writer: W) -> ExpensioResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    let err = |e: csv::Error| ExpensioError::Export(e.to_string());

    out.write_record(["Date", "Description", "Category", "Amount"])
        .map_err(err)?;

    for row in &report.rows {
        out.write_record([
            row.date.to_string(),
            row.description.clone(),
            row.category.clone(),
            row.amount.to_string(),
        ])
        .map_err(err)?;
    }

    out.flush()
        .map_err(|e| ExpensioError::Export(e.to_string()))?;

    Ok(())
}
