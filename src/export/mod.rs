//! Export module for Expensio
//!
//! Writes a [`TransactionReport`] to a file or any writer:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable, pretty-printed
//! - YAML: human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ExpensioError, ExpensioResult};
use crate::reports::TransactionReport;

pub use self::csv::export_report_csv;
pub use self::json::export_report_json;
pub use self::yaml::export_report_yaml;

/// Export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Write `report` in `format`
pub fn export_report<W: Write>(
    report: &TransactionReport,
    format: ExportFormat,
    writer: W,
) -> ExpensioResult<()> {
    match format {
        ExportFormat::Csv => export_report_csv(report, writer),
        ExportFormat::Json => export_report_json(report, writer, true),
        ExportFormat::Yaml => export_report_yaml(report, writer),
    }
}

/// Write `report` to the file at `output`, replacing it
pub fn export_report_to_file(
    report: &TransactionReport,
    format: ExportFormat,
    output: &Path,
) -> ExpensioResult<()> {
    let file = File::create(output).map_err(|e| {
        ExpensioError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    export_report(report, format, &mut writer)?;
    writer
        .flush()
        .map_err(|e| ExpensioError::Export(e.to_string()))?;

    tracing::info!(path = %output.display(), %format, rows = report.rows.len(), "report exported");
    Ok(())
}
