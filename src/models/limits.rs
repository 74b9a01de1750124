//! Budget limit models
//!
//! [`BudgetLimits`] is the read-only snapshot of the user's configured
//! spending ceilings. [`LimitEvaluation`] is what the evaluator hands back
//! for a candidate expense.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// The period a budget limit applies to
///
/// Variants are declared in priority order: when a date falls inside several
/// configured windows, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitType {
    Daily,
    Weekly,
    Monthly,
}

impl LimitType {
    /// All limit types, highest priority first
    pub const PRIORITY: [LimitType; 3] = [Self::Daily, Self::Weekly, Self::Monthly];
}

impl fmt::Display for LimitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

/// How the trailing weekly window is bounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeekWindow {
    /// Any date on or after `today - 7 days`, including future dates
    #[default]
    OpenEnded,
    /// Only dates in `[today - 7 days, today]`
    Clipped,
}

/// Configured spending ceilings
///
/// A limit that is absent or zero is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_limit: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_limit: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_limit: Option<Money>,

    /// Display code such as "USD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl BudgetLimits {
    /// The configured value for `limit_type`, if any
    pub fn limit(&self, limit_type: LimitType) -> Option<Money> {
        let value = match limit_type {
            LimitType::Daily => self.daily_limit,
            LimitType::Weekly => self.weekly_limit,
            LimitType::Monthly => self.monthly_limit,
        };
        value.filter(|v| !v.is_zero())
    }

    pub fn is_configured(&self, limit_type: LimitType) -> bool {
        self.limit(limit_type).is_some()
    }

    /// True when at least one limit is set
    pub fn any_configured(&self) -> bool {
        LimitType::PRIORITY.iter().any(|t| self.is_configured(*t))
    }

    /// Set or clear a single limit
    pub fn set_limit(&mut self, limit_type: LimitType, value: Option<Money>) {
        let slot = match limit_type {
            LimitType::Daily => &mut self.daily_limit,
            LimitType::Weekly => &mut self.weekly_limit,
            LimitType::Monthly => &mut self.monthly_limit,
        };
        *slot = value;
    }

    /// Currency code, or an empty string when none is set
    pub fn currency_code(&self) -> &str {
        self.currency.as_deref().unwrap_or("")
    }

    /// Validate the limits before they are stored
    pub fn validate(&self) -> Result<(), LimitValidationError> {
        for limit_type in LimitType::PRIORITY {
            if let Some(value) = self.limit(limit_type) {
                if value.is_negative() {
                    return Err(LimitValidationError::Negative(limit_type, value));
                }
            }
        }
        Ok(())
    }
}

/// The outcome of evaluating a candidate expense against the limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum LimitEvaluation {
    /// Commit without asking
    NoLimit,
    /// The amount exceeds the selected limit; ask before committing
    #[serde(rename_all = "camelCase")]
    Exceeded {
        limit_type: LimitType,
        limit_value: Money,
    },
}

impl LimitEvaluation {
    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }
}

/// Validation errors for budget limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitValidationError {
    Negative(LimitType, Money),
}

impl fmt::Display for LimitValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative(limit_type, value) => {
                write!(f, "The {} limit cannot be negative ({})", limit_type, value)
            }
        }
    }
}

impl std::error::Error for LimitValidationError {}
