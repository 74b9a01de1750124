use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::{BudgetLimits, Category, Expense};

use super::diff::changed_fields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Created,
    Updated,
}

/// What an entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Expense,
    Category,
    Limits,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub action: Action,
    pub subject: Subject,
    /// Short id of the record; empty for the single limits record
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<String>,
}

impl AuditEntry {
    pub fn expense_created(expense: &Expense) -> Self {
        Self::created(
            Subject::Expense,
            expense.id.to_string(),
            Some(expense_label(expense)),
            serde_json::to_value(expense).ok(),
        )
    }

    pub fn expense_updated(before: &Expense, after: &Expense) -> Self {
        Self::updated(
            Subject::Expense,
            after.id.to_string(),
            Some(expense_label(after)),
            serde_json::to_value(before).ok(),
            serde_json::to_value(after).ok(),
        )
    }

    pub fn category_created(category: &Category) -> Self {
        Self::created(
            Subject::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            serde_json::to_value(category).ok(),
        )
    }

    pub fn limits_updated(before: &BudgetLimits, after: &BudgetLimits) -> Self {
        Self::updated(
            Subject::Limits,
            String::new(),
            None,
            serde_json::to_value(before).ok(),
            serde_json::to_value(after).ok(),
        )
    }

    fn created(
        subject: Subject,
        id: String,
        label: Option<String>,
        after: Option<serde_json::Value>,
    ) -> Self {
        Self {
            at: Utc::now(),
            action: Action::Created,
            subject,
            id,
            label,
            before: None,
            after,
            changes: Vec::new(),
        }
    }

    fn updated(
        subject: Subject,
        id: String,
        label: Option<String>,
        before: Option<serde_json::Value>,
        after: Option<serde_json::Value>,
    ) -> Self {
        let changes = match (&before, &after) {
            (Some(b), Some(a)) => changed_fields(b, a),
            _ => Vec::new(),
        };

        Self {
            at: Utc::now(),
            action: Action::Updated,
            subject,
            id,
            label,
            before,
            after,
            changes,
        }
    }

    /// One headline, then one indented line per changed field
    pub fn render(&self) -> String {
        let action = match self.action {
            Action::Created => "created",
            Action::Updated => "updated",
        };
        let subject = match self.subject {
            Subject::Expense => "expense",
            Subject::Category => "category",
            Subject::Limits => "budget limits",
        };

        let mut out = format!("{}  {} {}", self.at.format("%Y-%m-%d %H:%M:%S UTC"), action, subject);
        if !self.id.is_empty() {
            out.push(' ');
            out.push_str(&self.id);
        }
        if let Some(label) = &self.label {
            out.push_str(&format!(" ({})", label));
        }
        for change in &self.changes {
            out.push_str(&format!("\n    {}", change));
        }
        out
    }
}

fn expense_label(expense: &Expense) -> String {
    format!("{}, {} on {}", expense.note, expense.amount, expense.date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, NewExpense};
    use chrono::NaiveDate;

    fn lunch(cents: i64) -> Expense {
        Expense::from_new(NewExpense::new(
            "Lunch",
            Money::from_cents(cents),
            CategoryId::new(),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        ))
    }

    #[test]
    fn test_expense_created() {
        let expense = lunch(1250);
        let entry = AuditEntry::expense_created(&expense);

        assert_eq!(entry.action, Action::Created);
        assert_eq!(entry.subject, Subject::Expense);
        assert_eq!(entry.label.as_deref(), Some("Lunch, 12.50 on 2026-10-16"));
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["amount"], 1250);
    }

    #[test]
    fn test_expense_updated_lists_changes() {
        let before = lunch(1250);
        let mut after = before.clone();
        after.amount = Money::from_cents(1500);

        let entry = AuditEntry::expense_updated(&before, &after);
        assert_eq!(entry.changes, vec!["amount: 1250 -> 1500".to_string()]);
        assert!(entry.render().contains("updated expense exp-"));
        assert!(entry.render().ends_with("\n    amount: 1250 -> 1500"));
    }

    #[test]
    fn test_limits_render_without_id() {
        let after = BudgetLimits {
            daily_limit: Some(Money::from_units(100, 0)),
            ..Default::default()
        };
        let entry = AuditEntry::limits_updated(&BudgetLimits::default(), &after);

        let text = entry.render();
        assert!(text.contains("updated budget limits\n"));
        assert!(text.contains("dailyLimit"));
    }
}
