//! Transaction list filtering and paging
//!
//! The list is scoped either by an explicit date range or by the period
//! cursor (a month or a whole year), then narrowed by a case-insensitive
//! search on the expense note.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ExpensioError, ExpensioResult};
use crate::models::Expense;

/// Whether the cursor selects a month or a whole year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Year,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

/// Years the cursor can show
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// The month or year the list is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodCursor {
    pub mode: ViewMode,
    pub year: i32,
    /// 1-12; ignored in year mode
    pub month: u32,
}

impl PeriodCursor {
    pub fn new(mode: ViewMode, year: i32, month: u32) -> ExpensioResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ExpensioError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self {
            mode,
            year: checked_year(Some(year))?,
            month,
        })
    }

    /// The period containing `today`
    pub fn current(mode: ViewMode, today: NaiveDate) -> Self {
        Self {
            mode,
            year: today.year(),
            month: today.month(),
        }
    }

    /// Step back one month (or one year in year mode)
    pub fn prev(self) -> ExpensioResult<Self> {
        self.step(-1)
    }

    /// Step forward one month (or one year in year mode)
    pub fn next(self) -> ExpensioResult<Self> {
        self.step(1)
    }

    /// Move by `offset` periods; months wrap across year boundaries
    pub fn step(self, offset: i64) -> ExpensioResult<Self> {
        match self.mode {
            ViewMode::Year => {
                let year = i64::from(self.year)
                    .checked_add(offset)
                    .and_then(|y| i32::try_from(y).ok());
                Ok(Self {
                    year: checked_year(year)?,
                    ..self
                })
            }
            ViewMode::Month => {
                let index = i64::from(self.year)
                    .checked_mul(12)
                    .and_then(|i| i.checked_add(i64::from(self.month) - 1))
                    .and_then(|i| i.checked_add(offset))
                    .ok_or_else(|| out_of_range(offset))?;
                let year = i32::try_from(index.div_euclid(12)).ok();
                Ok(Self {
                    year: checked_year(year)?,
                    month: index.rem_euclid(12) as u32 + 1,
                    ..self
                })
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.mode {
            ViewMode::Year => date.year() == self.year,
            ViewMode::Month => date.year() == self.year && date.month() == self.month,
        }
    }

    /// "October 2026" in month mode, "2026" in year mode
    pub fn label(&self) -> String {
        match self.mode {
            ViewMode::Year => self.year.to_string(),
            ViewMode::Month => match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
                Some(first) => first.format("%B %Y").to_string(),
                None => format!("{}-{:02}", self.year, self.month),
            },
        }
    }
}

fn checked_year(year: Option<i32>) -> ExpensioResult<i32> {
    year.filter(|y| YEAR_RANGE.contains(y)).ok_or_else(|| {
        ExpensioError::Validation(format!(
            "Year must be between {} and {}",
            YEAR_RANGE.start(),
            YEAR_RANGE.end()
        ))
    })
}

fn out_of_range(offset: i64) -> ExpensioError {
    ExpensioError::Validation(format!("Cannot move the period by {}", offset))
}

/// Which expenses the list (and the report) shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQuery {
    pub cursor: PeriodCursor,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub search: String,
}

impl TransactionQuery {
    pub fn new(cursor: PeriodCursor) -> Self {
        Self {
            cursor,
            from: None,
            to: None,
            search: String::new(),
        }
    }

    pub fn with_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// The date range, only when both ends are set
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.from.zip(self.to)
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        let in_scope = match self.range() {
            Some((from, to)) => expense.date >= from && expense.date <= to,
            None => self.cursor.contains(expense.date),
        };

        let search = self.search.trim().to_lowercase();
        in_scope && (search.is_empty() || expense.note.to_lowercase().contains(&search))
    }

    /// Filter `expenses`, keeping their order
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        let filtered: Vec<Expense> = expenses.iter().filter(|e| self.matches(e)).cloned().collect();
        tracing::debug!(
            total = expenses.len(),
            shown = filtered.len(),
            scope = %self.scope_label(),
            "filtered transactions"
        );
        filtered
    }

    /// Human label for the active scope
    pub fn scope_label(&self) -> String {
        match self.range() {
            Some((from, to)) => format!("Range: {} to {}", from, to),
            None => match self.cursor.mode {
                ViewMode::Year => format!("Year: {}", self.cursor.label()),
                ViewMode::Month => format!("Month: {}", self.cursor.label()),
            },
        }
    }
}

pub const DEFAULT_VISIBLE_ROWS: usize = 5;
pub const DEFAULT_SEE_MORE_STEP: usize = 10;

/// How many rows of a filtered list are shown
///
/// Any filter change calls [`reset`](Self::reset); "see more" extends the
/// window by the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRows {
    initial: usize,
    step: usize,
    visible: usize,
}

impl Default for VisibleRows {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_ROWS, DEFAULT_SEE_MORE_STEP)
    }
}

impl VisibleRows {
    pub fn new(initial: usize, step: usize) -> Self {
        Self {
            initial,
            step,
            visible: initial,
        }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn reset(&mut self) {
        self.visible = self.initial;
    }

    pub fn see_more(&mut self) {
        self.visible += self.step;
    }

    /// The rows currently shown
    pub fn page<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        &rows[..rows.len().min(self.visible)]
    }

    pub fn has_more(&self, total: usize) -> bool {
        total > self.visible
    }
}
