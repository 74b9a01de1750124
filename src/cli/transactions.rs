//! Transaction list CLI commands
//!
//! The filter flags are shared with the report commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::backend::{Backend, SessionId};
use crate::config::settings::Settings;
use crate::display::format_expense_table;
use crate::error::ExpensioResult;
use crate::services::{PeriodCursor, SessionCache, TransactionQuery, ViewMode, VisibleRows};
use crate::storage::Storage;

/// Enough months to cross every supported year
const MAX_STEPS: i64 = 9999 * 12;

/// Which expenses to show
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Show a month or a whole year
    #[arg(long, value_enum, default_value_t = ViewMode::Month)]
    pub mode: ViewMode,

    /// Year to show (default: current)
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=9999))]
    pub year: Option<i32>,

    /// Month to show, 1-12 (default: current)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Start of a date range (YYYY-MM-DD); needs --to
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End of a date range (YYYY-MM-DD); needs --from
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Only expenses whose description contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Step back N months (or years)
    #[arg(
        long,
        default_value_t = 0,
        conflicts_with = "next",
        value_parser = clap::value_parser!(u32).range(..=MAX_STEPS)
    )]
    pub prev: u32,

    /// Step forward N months (or years)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(..=MAX_STEPS))]
    pub next: u32,
}

impl FilterArgs {
    /// Build the query relative to `today`
    pub fn to_query(&self, today: NaiveDate) -> ExpensioResult<TransactionQuery> {
        let current = PeriodCursor::current(self.mode, today);
        let cursor = PeriodCursor::new(
            self.mode,
            self.year.unwrap_or(current.year),
            self.month.unwrap_or(current.month),
        )?
        .step(i64::from(self.next) - i64::from(self.prev))?;

        Ok(TransactionQuery::new(cursor)
            .with_range(self.from, self.to)
            .with_search(self.search.clone().unwrap_or_default()))
    }
}

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// List expenses for a month, a year or a date range
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Press "see more" N times
        #[arg(long, default_value_t = 0)]
        more: usize,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: TransactionCommands,
) -> ExpensioResult<()> {
    match cmd {
        TransactionCommands::List { filter, more } => {
            let query = filter.to_query(today)?;

            let cache = SessionCache::new(storage);
            let session = SessionId::default();
            let categories = cache.categories(&session)?;
            let limits = cache.limits(&session)?;

            let expenses = query.apply(&cache.backend().list_expenses()?);

            let mut rows = VisibleRows::new(settings.visible_rows, settings.see_more_step);
            for _ in 0..more {
                rows.see_more();
            }
            let page = rows.page(&expenses);

            println!("{}", query.scope_label());
            println!();
            print!(
                "{}",
                format_expense_table(page, &categories, limits.currency_code())
            );

            if rows.has_more(expenses.len()) {
                println!();
                println!(
                    "Showing {} of {}. Use --more {} to see more.",
                    page.len(),
                    expenses.len(),
                    more + 1
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpensioError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_default_filter_is_current_month() {
        let query = FilterArgs::default().to_query(today()).unwrap();
        assert_eq!(query.scope_label(), "Month: October 2026");
    }

    #[test]
    fn test_prev_steps_back_from_selected_month() {
        let filter = FilterArgs {
            month: Some(1),
            prev: 1,
            ..Default::default()
        };
        assert_eq!(filter.to_query(today()).unwrap().scope_label(), "Month: December 2025");
    }

    #[test]
    fn test_year_mode_with_search() {
        let filter = FilterArgs {
            mode: ViewMode::Year,
            next: 1,
            search: Some("rent".into()),
            ..Default::default()
        };
        let query = filter.to_query(today()).unwrap();
        assert_eq!(query.scope_label(), "Year: 2027");
        assert_eq!(query.search, "rent");
    }

    #[test]
    fn test_huge_offsets_are_errors() {
        let filter = FilterArgs {
            next: i32::MAX as u32,
            ..Default::default()
        };
        assert!(matches!(
            filter.to_query(today()),
            Err(ExpensioError::Validation(_))
        ));

        let filter = FilterArgs {
            prev: u32::MAX,
            ..Default::default()
        };
        assert!(filter.to_query(today()).is_err());

        let filter = FilterArgs {
            year: Some(300_000_000),
            ..Default::default()
        };
        assert!(filter.to_query(today()).is_err());
    }

    #[test]
    fn test_bad_month_is_rejected() {
        let filter = FilterArgs {
            month: Some(13),
            ..Default::default()
        };
        assert!(filter.to_query(today()).is_err());
    }
}
