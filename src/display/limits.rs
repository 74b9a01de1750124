//! Budget limit display formatting

use crate::models::{BudgetLimits, LimitType};
use crate::services::PendingExpense;

/// Format the configured limits
pub fn format_limits(limits: &BudgetLimits) -> String {
    let mut output = String::new();
    output.push_str("Budget Limits\n");
    output.push_str(&"=".repeat(30));
    output.push('\n');

    for limit_type in LimitType::PRIORITY {
        let value = limits
            .limit(limit_type)
            .map(|v| v.format_with_code(limits.currency_code()))
            .unwrap_or_else(|| "(not set)".to_string());

        output.push_str(&format!("{:<10} {}\n", format!("{}:", label(limit_type)), value));
    }

    let currency = match limits.currency_code() {
        "" => "(not set)",
        code => code,
    };
    output.push_str(&format!("{:<10} {}\n", "Currency:", currency));

    output
}

fn label(limit_type: LimitType) -> &'static str {
    match limit_type {
        LimitType::Daily => "Daily",
        LimitType::Weekly => "Weekly",
        LimitType::Monthly => "Monthly",
    }
}

/// The two-line confirmation shown before committing an over-limit expense
pub fn format_breach_prompt(pending: &PendingExpense) -> String {
    format!(
        "Are you sure you want to exceed your {} limit?\nYour set {} limit is: {}",
        pending.limit_type,
        pending.limit_type,
        pending.limit_value.format_with_code(&pending.currency)
    )
}
