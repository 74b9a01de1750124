//! Budget limit evaluation
//!
//! Decides whether a candidate expense needs confirmation before it is
//! committed. The same evaluator serves both the add and the edit flow.
//!
//! Only one limit is ever checked: the highest-priority period
//! (daily > weekly > monthly) whose window contains the expense date and
//! whose limit is configured. A lower-priority limit is not consulted even
//! when the selected one is not exceeded.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{BudgetLimits, LimitEvaluation, LimitType, Money, WeekWindow};

/// Which budget windows a date falls into, relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodFlags {
    pub is_same_day: bool,
    pub is_same_week: bool,
    pub is_same_month: bool,
}

impl PeriodFlags {
    pub fn contains(&self, limit_type: LimitType) -> bool {
        match limit_type {
            LimitType::Daily => self.is_same_day,
            LimitType::Weekly => self.is_same_week,
            LimitType::Monthly => self.is_same_month,
        }
    }
}

/// Classify `candidate` against the daily, weekly and monthly windows
///
/// The weekly window starts seven days before `today`. With
/// [`WeekWindow::OpenEnded`] it has no upper bound, so future dates count
/// as "this week"; [`WeekWindow::Clipped`] ends it at `today`.
pub fn classify_period(candidate: NaiveDate, today: NaiveDate, window: WeekWindow) -> PeriodFlags {
    let week_start = today - Duration::days(7);
    let within_upper = match window {
        WeekWindow::OpenEnded => true,
        WeekWindow::Clipped => candidate <= today,
    };

    PeriodFlags {
        is_same_day: candidate == today,
        is_same_week: candidate >= week_start && within_upper,
        is_same_month: candidate.year() == today.year() && candidate.month() == today.month(),
    }
}

/// Pick the limit type that applies to a date, if any
pub fn select_limit_type(flags: PeriodFlags, limits: &BudgetLimits) -> Option<LimitType> {
    LimitType::PRIORITY
        .into_iter()
        .find(|t| flags.contains(*t) && limits.is_configured(*t))
}

/// Evaluates candidate expenses against a snapshot of budget limits
#[derive(Debug, Clone)]
pub struct LimitEvaluator<'a> {
    limits: &'a BudgetLimits,
    window: WeekWindow,
}

impl<'a> LimitEvaluator<'a> {
    pub fn new(limits: &'a BudgetLimits) -> Self {
        Self {
            limits,
            window: WeekWindow::default(),
        }
    }

    pub fn with_week_window(mut self, window: WeekWindow) -> Self {
        self.window = window;
        self
    }

    /// Evaluate an expense of `amount` dated `date`
    ///
    /// Returns [`LimitEvaluation::Exceeded`] only when `amount` is strictly
    /// greater than the selected limit.
    pub fn evaluate(&self, amount: Money, date: NaiveDate, today: NaiveDate) -> LimitEvaluation {
        let flags = classify_period(date, today, self.window);

        let result = select_limit_type(flags, self.limits)
            .and_then(|limit_type| {
                self.limits
                    .limit(limit_type)
                    .map(|limit_value| (limit_type, limit_value))
            })
            .filter(|(_, limit_value)| amount > *limit_value)
            .map_or(LimitEvaluation::NoLimit, |(limit_type, limit_value)| {
                LimitEvaluation::Exceeded {
                    limit_type,
                    limit_value,
                }
            });

        tracing::debug!(%amount, %date, %today, ?flags, ?result, "evaluated budget limits");
        result
    }
}

/// Evaluate with the default week window
pub fn evaluate(
    amount: Money,
    date: NaiveDate,
    limits: &BudgetLimits,
    today: NaiveDate,
) -> LimitEvaluation {
    LimitEvaluator::new(limits).evaluate(amount, date, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn units(n: i64) -> Money {
        Money::from_units(n, 0)
    }

    fn today() -> NaiveDate {
        ymd(2026, 10, 16)
    }

    #[test]
    fn test_classify_today() {
        let flags = classify_period(today(), today(), WeekWindow::OpenEnded);
        assert_eq!(
            flags,
            PeriodFlags {
                is_same_day: true,
                is_same_week: true,
                is_same_month: true,
            }
        );
    }

    #[test]
    fn test_classify_week_boundary() {
        let seven_back = classify_period(ymd(2026, 10, 9), today(), WeekWindow::OpenEnded);
        assert!(seven_back.is_same_week);
        assert!(!seven_back.is_same_day);

        let eight_back = classify_period(ymd(2026, 10, 8), today(), WeekWindow::OpenEnded);
        assert!(!eight_back.is_same_week);
        assert!(eight_back.is_same_month);
    }

    #[test]
    fn test_classify_week_spans_month_boundary() {
        let flags = classify_period(ymd(2026, 9, 28), ymd(2026, 10, 2), WeekWindow::OpenEnded);
        assert!(flags.is_same_week);
        assert!(!flags.is_same_month);
    }

    #[test]
    fn test_open_ended_week_includes_future() {
        let future = ymd(2027, 3, 1);
        assert!(classify_period(future, today(), WeekWindow::OpenEnded).is_same_week);
        assert!(!classify_period(future, today(), WeekWindow::Clipped).is_same_week);
        assert!(classify_period(today(), today(), WeekWindow::Clipped).is_same_week);
    }

    #[test]
    fn test_same_month_requires_same_year() {
        let flags = classify_period(ymd(2025, 10, 16), today(), WeekWindow::OpenEnded);
        assert!(!flags.is_same_month);
    }

    #[test]
    fn test_daily_only() {
        let limits = BudgetLimits {
            daily_limit: Some(units(100)),
            ..Default::default()
        };

        assert_eq!(
            evaluate(units(150), today(), &limits, today()),
            LimitEvaluation::Exceeded {
                limit_type: LimitType::Daily,
                limit_value: units(100),
            }
        );
        assert_eq!(evaluate(units(50), today(), &limits, today()), LimitEvaluation::NoLimit);
    }

    #[test]
    fn test_equal_amount_is_not_exceeded() {
        let limits = BudgetLimits {
            daily_limit: Some(units(100)),
            weekly_limit: Some(units(300)),
            monthly_limit: Some(units(900)),
            currency: None,
        };

        assert_eq!(evaluate(units(100), today(), &limits, today()), LimitEvaluation::NoLimit);
        assert_eq!(
            evaluate(Money::from_cents(10001), today(), &limits, today()),
            LimitEvaluation::Exceeded {
                limit_type: LimitType::Daily,
                limit_value: units(100),
            }
        );
    }

    #[test]
    fn test_daily_wins_over_weekly() {
        let limits = BudgetLimits {
            daily_limit: Some(units(100)),
            weekly_limit: Some(units(50)),
            ..Default::default()
        };

        let result = evaluate(units(200), today(), &limits, today());
        assert_eq!(
            result,
            LimitEvaluation::Exceeded {
                limit_type: LimitType::Daily,
                limit_value: units(100),
            }
        );
    }

    #[test]
    fn test_selected_limit_not_exceeded_does_not_fall_through() {
        let limits = BudgetLimits {
            daily_limit: Some(units(100)),
            weekly_limit: Some(units(50)),
            ..Default::default()
        };

        // 80 is over the weekly limit but daily was selected and holds
        assert_eq!(evaluate(units(80), today(), &limits, today()), LimitEvaluation::NoLimit);
    }

    #[test]
    fn test_weekly_applies_to_past_days() {
        let limits = BudgetLimits {
            daily_limit: Some(units(100)),
            weekly_limit: Some(units(50)),
            ..Default::default()
        };

        assert_eq!(
            evaluate(units(80), ymd(2026, 10, 12), &limits, today()),
            LimitEvaluation::Exceeded {
                limit_type: LimitType::Weekly,
                limit_value: units(50),
            }
        );
    }

    #[test]
    fn test_monthly_only_not_exceeded() {
        let limits = BudgetLimits {
            monthly_limit: Some(units(500)),
            ..Default::default()
        };

        assert_eq!(
            evaluate(units(200), ymd(2026, 10, 1), &limits, today()),
            LimitEvaluation::NoLimit
        );
        assert_eq!(
            evaluate(units(501), ymd(2026, 10, 1), &limits, today()),
            LimitEvaluation::Exceeded {
                limit_type: LimitType::Monthly,
                limit_value: units(500),
            }
        );
    }

    #[test]
    fn test_no_limits_never_exceeded() {
        let limits = BudgetLimits {
            daily_limit: Some(Money::zero()),
            currency: Some("USD".into()),
            ..Default::default()
        };

        for amount in [1, 100, 1_000_000] {
            assert_eq!(
                evaluate(units(amount), today(), &limits, today()),
                LimitEvaluation::NoLimit
            );
        }
    }

    #[test]
    fn test_outside_every_window() {
        let limits = BudgetLimits {
            daily_limit: Some(units(1)),
            weekly_limit: Some(units(1)),
            monthly_limit: Some(units(1)),
            currency: None,
        };

        assert_eq!(
            evaluate(units(1000), ymd(2026, 8, 1), &limits, today()),
            LimitEvaluation::NoLimit
        );
    }

    #[test]
    fn test_clipped_window_skips_future_weekly() {
        let limits = BudgetLimits {
            weekly_limit: Some(units(10)),
            ..Default::default()
        };
        let next_year = ymd(2027, 1, 5);

        let open = LimitEvaluator::new(&limits).evaluate(units(20), next_year, today());
        assert!(open.is_exceeded());

        let clipped = LimitEvaluator::new(&limits)
            .with_week_window(WeekWindow::Clipped)
            .evaluate(units(20), next_year, today());
        assert_eq!(clipped, LimitEvaluation::NoLimit);
    }
}
