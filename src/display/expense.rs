//! Expense display formatting
//!
//! Renders the filtered expense list with `tabled`, plus a detail view for
//! a single expense.

use std::collections::HashMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, CategoryId, Expense};
use crate::reports::MISSING_CATEGORY;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    note: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn category_name<'a>(names: &HashMap<CategoryId, &'a str>, id: &CategoryId) -> &'a str {
    names.get(id).copied().unwrap_or(MISSING_CATEGORY)
}

/// Format expenses as a table
pub fn format_expense_table(expenses: &[Expense], categories: &[Category], currency: &str) -> String {
    if expenses.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let names: HashMap<_, _> = categories.iter().map(|c| (c.id, c.name.as_str())).collect();

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: e.date.format("%Y-%m-%d").to_string(),
        note: e.note.clone(),
        category: category_name(&names, &e.category_id).to_string(),
        amount: e.amount.format_with_code(currency),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format a single expense
pub fn format_expense_details(expense: &Expense, category: Option<&Category>, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", expense.note));
    output.push_str(&format!(
        "Category:    {}\n",
        category.map(|c| c.name.as_str()).unwrap_or(MISSING_CATEGORY)
    ));
    output.push_str(&format!("Amount:      {}\n", expense.amount.format_with_code(currency)));

    output
}
