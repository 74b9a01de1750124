//! YAML Export functionality

use std::io::Write;

use crate::error::{ExpensioError, ExpensioResult};
use crate::reports::TransactionReport;

/// Export a transaction report to YAML, with a comment header
pub fn export_report_yaml<W: Write>(report: &TransactionReport, mut writer: W) -> ExpensioResult<()> {
    let err = |e: std::io::Error| ExpensioError::Export(e.to_string());

    writeln!(writer, "# {} {}", report.title, report.heading).map_err(err)?;
    writeln!(writer, "# {}", report.scope).map_err(err)?;
    writeln!(writer, "# Generated: {}", report.generated_at).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, report).map_err(|e| ExpensioError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::ReportRow;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_yaml_export() {
        let report = TransactionReport {
            title: "Expensio".into(),
            heading: "Transaction Report".into(),
            scope: "Range: 2026-10-01 to 2026-10-31".into(),
            generated_at: Utc::now(),
            currency: String::new(),
            rows: vec![ReportRow {
                date: NaiveDate::from_ymd_opt(2026, 10, 5).unwrap(),
                description: "Books".into(),
                category: "Education".into(),
                amount: Money::from_cents(3000),
            }],
            total: Money::from_cents(3000),
        };

        let mut out = Vec::new();
        export_report_yaml(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# Expensio Transaction Report\n# Range: 2026-10-01 to 2026-10-31\n"));

        let body: String = text
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed: TransactionReport = serde_yaml::from_str(&body).unwrap();
        assert_eq!(parsed.rows[0].description, "Books");
    }
}
