//! Report CLI commands

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::backend::{Backend, SessionId};
use crate::cli::transactions::FilterArgs;
use crate::error::ExpensioResult;
use crate::export::{export_report_to_file, ExportFormat};
use crate::reports::TransactionReport;
use crate::services::SessionCache;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Print the transaction report
    Show {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Write the transaction report to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

fn build_report(
    storage: &Storage,
    filter: &FilterArgs,
    today: NaiveDate,
) -> ExpensioResult<TransactionReport> {
    let query = filter.to_query(today)?;

    let cache = SessionCache::new(storage);
    let session = SessionId::default();
    let categories = cache.categories(&session)?;
    let limits = cache.limits(&session)?;
    let expenses = cache.backend().list_expenses()?;

    Ok(TransactionReport::generate(
        &expenses,
        &categories,
        &query,
        limits.currency_code(),
    ))
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    today: NaiveDate,
    cmd: ReportCommands,
) -> ExpensioResult<()> {
    match cmd {
        ReportCommands::Show { filter } => {
            let report = build_report(storage, &filter, today)?;
            print!("{}", report.format_terminal());
        }

        ReportCommands::Export {
            output,
            format,
            filter,
        } => {
            let report = build_report(storage, &filter, today)?;
            export_report_to_file(&report, format, &output)?;
            println!(
                "Exported {} transaction(s) to: {}",
                report.rows.len(),
                output.display()
            );
        }
    }

    Ok(())
}
