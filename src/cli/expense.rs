//! Expense CLI commands
//!
//! Adding and editing both go through [`ExpenseService::submit`]; an
//! over-limit expense is only saved after the user confirms it.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use clap::Subcommand;

use crate::backend::{Backend, SessionId};
use crate::config::settings::Settings;
use crate::display::{format_breach_prompt, format_expense_details};
use crate::error::{ExpensioError, ExpensioResult};
use crate::services::{
    resolve_category, CommitTarget, Committed, ExpenseForm, ExpenseService, PendingExpense,
    SessionCache, SubmitOutcome,
};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        note: String,
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name or ID
        category: String,
        /// Date spent (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Save without asking when a budget limit is exceeded
        #[arg(short, long)]
        yes: bool,
    },

    /// Change an existing expense
    Edit {
        /// Expense ID
        id: String,
        /// New description
        #[arg(short, long)]
        note: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Save without asking when a budget limit is exceeded
        #[arg(short, long)]
        yes: bool,
    },

    /// Show one expense
    Show {
        /// Expense ID
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> ExpensioResult<()> {
    let cache = SessionCache::new(storage);
    let service =
        ExpenseService::new(&cache, SessionId::default()).with_week_window(settings.week_window);

    match cmd {
        ExpenseCommands::Add {
            note,
            amount,
            category,
            date,
            yes,
        } => {
            let date = date.unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
            let form = ExpenseForm::new(note, amount, category, date);

            let outcome = service.submit(&form, CommitTarget::Create, today)?;
            if let Some(committed) = settle(&service, outcome, yes)? {
                println!("Added expense: {}", committed.expense);
                println!("  ID: {}", committed.expense.id);
            }
        }

        ExpenseCommands::Edit {
            id,
            note,
            amount,
            category,
            date,
            yes,
        } => {
            let expense = service
                .find(&id)?
                .ok_or_else(|| ExpensioError::expense_not_found(&id))?;

            if note.is_none() && amount.is_none() && category.is_none() && date.is_none() {
                println!("No changes specified.");
                return Ok(());
            }

            let mut form = ExpenseForm::from_expense(&expense);
            if let Some(note) = note {
                form.note = note;
            }
            if let Some(amount) = amount {
                form.amount = amount;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(date) = date {
                form.date = date;
            }

            let outcome = service.submit(&form, CommitTarget::Update(expense.id), today)?;
            if let Some(committed) = settle(&service, outcome, yes)? {
                println!("Updated expense: {}", committed.expense);
            }
        }

        ExpenseCommands::Show { id } => {
            let expense = service
                .find(&id)?
                .ok_or_else(|| ExpensioError::expense_not_found(&id))?;
            let categories = service.categories()?;
            let category = resolve_category(&categories, &expense.category_id.as_uuid().to_string());
            let limits = cache.limits(&SessionId::default())?;

            print!(
                "{}",
                format_expense_details(&expense, category, limits.currency_code())
            );
        }
    }

    Ok(())
}

/// Commit straight away, or ask first when a limit is exceeded
///
/// Returns `None` when the user declines.
fn settle<B: Backend>(
    service: &ExpenseService<'_, B>,
    outcome: SubmitOutcome,
    assume_yes: bool,
) -> ExpensioResult<Option<Committed>> {
    match outcome {
        SubmitOutcome::Committed(committed) => Ok(Some(committed)),
        SubmitOutcome::NeedsConfirmation(pending) => {
            let stdin = io::stdin();
            let confirmed = assume_yes || confirm_breach(&pending, &mut stdin.lock())?;

            if confirmed {
                service.confirm(&pending).map(Some)
            } else {
                println!("Expense not saved.");
                Ok(None)
            }
        }
    }
}

/// Show the breach prompt and read a yes/no answer
pub fn confirm_breach<R: BufRead>(pending: &PendingExpense, input: &mut R) -> ExpensioResult<bool> {
    println!("{}", format_breach_prompt(pending));
    print!("Save anyway? (yes/no): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
