//! Transaction Report
//!
//! The filtered transaction list, laid out for printing or export.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, Expense, Money};
use crate::services::TransactionQuery;

pub const REPORT_TITLE: &str = "Expensio";
pub const REPORT_HEADING: &str = "Transaction Report";

/// Shown when an expense's category no longer exists
pub const MISSING_CATEGORY: &str = "N/A";

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct ReportRow {
    #[tabled(rename = "Date")]
    pub date: NaiveDate,

    #[tabled(rename = "Description")]
    pub description: String,

    #[tabled(rename = "Category")]
    pub category: String,

    #[tabled(rename = "Amount")]
    pub amount: Money,
}

/// Transaction Report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReport {
    pub title: String,
    pub heading: String,
    /// "Range: a to b", "Year: y" or "Month: October 2026"
    pub scope: String,
    pub generated_at: DateTime<Utc>,
    /// Currency code of the budget limits, empty when unset
    pub currency: String,
    pub rows: Vec<ReportRow>,
    pub total: Money,
}

impl TransactionReport {
    /// Build the report for the expenses `query` selects
    pub fn generate(
        expenses: &[Expense],
        categories: &[Category],
        query: &TransactionQuery,
        currency: &str,
    ) -> Self {
        let names: HashMap<_, _> = categories.iter().map(|c| (c.id, c.name.as_str())).collect();

        let rows: Vec<ReportRow> = query
            .apply(expenses)
            .into_iter()
            .map(|expense| ReportRow {
                date: expense.date,
                category: names
                    .get(&expense.category_id)
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| MISSING_CATEGORY.to_string()),
                description: expense.note,
                amount: expense.amount,
            })
            .collect();

        let total: Money = rows.iter().map(|r| r.amount).sum();

        Self {
            title: REPORT_TITLE.to_string(),
            heading: REPORT_HEADING.to_string(),
            scope: query.scope_label(),
            generated_at: Utc::now(),
            currency: currency.trim().to_string(),
            rows,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.title));
        output.push_str(&format!("{}\n", self.heading));
        output.push_str(&format!("{}\n\n", self.scope));

        if self.rows.is_empty() {
            output.push_str("No transactions found.\n");
            return output;
        }

        let mut table = Table::new(self.rows.iter().cloned());
        table.with(Style::sharp());
        output.push_str(&table.to_string());
        output.push('\n');

        output.push_str(&format!(
            "\n{} transaction(s), total {}\n",
            self.rows.len(),
            self.total.format_with_code(&self.currency)
        ));

        output
    }
}
