//! Expense service
//!
//! One submit flow serves both adding and editing an expense:
//!
//! 1. validate the raw form fields; any failure stops here
//! 2. evaluate the amount and date against the session's budget limits
//! 3. commit straight away, or hand back a [`PendingExpense`] that the
//!    caller must explicitly [`confirm`](ExpenseService::confirm)
//!
//! The form is only ever borrowed, so declining a pending expense (or a
//! failed commit) leaves what the user typed untouched.

use chrono::NaiveDate;

use crate::backend::{Backend, SessionId};
use crate::error::{ExpensioResult, FormErrors};
use crate::models::{Category, Expense, ExpenseId, LimitEvaluation, LimitType, Money, MoneyParseError, NewExpense, WeekWindow};

use super::cache::SessionCache;
use super::category::resolve_category;
use super::limit::LimitEvaluator;

/// Raw expense form input, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub note: String,
    pub amount: String,
    /// Category name or id
    pub category: String,
    /// Date as `YYYY-MM-DD`
    pub date: String,
}

impl ExpenseForm {
    pub fn new(
        note: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            note: note.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Pre-fill a form from an existing expense
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            note: expense.note.clone(),
            amount: expense.amount.to_string(),
            category: expense.category_id.as_uuid().to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Check every field and build the expense to submit
    ///
    /// All failing fields are reported together.
    pub fn validate(&self, categories: &[Category]) -> Result<NewExpense, FormErrors> {
        let mut errors = FormErrors::default();

        let note = self.note.trim();
        if note.is_empty() {
            errors.note = Some("Note is required".into());
        }

        let amount = self.amount.trim();
        let amount = if amount.is_empty() {
            errors.amount = Some("Amount is required".into());
            None
        } else {
            match Money::parse(amount) {
                Ok(value) if value.is_positive() => Some(value),
                Err(MoneyParseError::TooPrecise(_)) => {
                    errors.amount = Some("Amount cannot have more than two decimal places".into());
                    None
                }
                _ => {
                    errors.amount = Some("Amount must be a positive number".into());
                    None
                }
            }
        };

        let category = self.category.trim();
        let category = if category.is_empty() {
            errors.category = Some("Category is required".into());
            None
        } else {
            let found = resolve_category(categories, category);
            if found.is_none() {
                errors.category = Some(format!("Unknown category: {}", category));
            }
            found
        };

        let date = self.date.trim();
        let date = if date.is_empty() {
            errors.date = Some("Date is required".into());
            None
        } else {
            match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.date = Some("Invalid date format".into());
                    None
                }
            }
        };

        match (amount, category, date) {
            (Some(amount), Some(category), Some(date)) if errors.is_empty() => {
                Ok(NewExpense::new(note, amount, category.id, date))
            }
            _ => Err(errors),
        }
    }
}

/// Whether a submit creates a new expense or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTarget {
    Create,
    Update(ExpenseId),
}

/// A validated expense held back because it breaches a budget limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExpense {
    pub target: CommitTarget,
    pub expense: NewExpense,
    pub limit_type: LimitType,
    pub limit_value: Money,
    /// Currency code of the limits snapshot, empty when unset
    pub currency: String,
}

/// A committed expense and the refreshed expense list
#[derive(Debug, Clone)]
pub struct Committed {
    pub expense: Expense,
    pub expenses: Vec<Expense>,
}

/// Result of submitting a form
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Committed(Committed),
    NeedsConfirmation(PendingExpense),
}

/// Service for adding and editing expenses
pub struct ExpenseService<'a, B> {
    cache: &'a SessionCache<B>,
    session: SessionId,
    week_window: WeekWindow,
}

impl<'a, B: Backend> ExpenseService<'a, B> {
    pub fn new(cache: &'a SessionCache<B>, session: SessionId) -> Self {
        Self {
            cache,
            session,
            week_window: WeekWindow::default(),
        }
    }

    pub fn with_week_window(mut self, window: WeekWindow) -> Self {
        self.week_window = window;
        self
    }

    /// The merged category list for this session
    pub fn categories(&self) -> ExpensioResult<Vec<Category>> {
        self.cache.categories(&self.session)
    }

    /// Find an expense by full id or its `exp-` short form
    pub fn find(&self, identifier: &str) -> ExpensioResult<Option<Expense>> {
        let identifier = identifier.trim();
        let parsed = identifier.parse::<ExpenseId>().ok();

        Ok(self
            .cache
            .backend()
            .list_expenses()?
            .into_iter()
            .find(|e| Some(e.id) == parsed || e.id.to_string() == identifier))
    }

    /// Validate, evaluate and (when within limits) commit a form
    pub fn submit(
        &self,
        form: &ExpenseForm,
        target: CommitTarget,
        today: NaiveDate,
    ) -> ExpensioResult<SubmitOutcome> {
        let categories = self.categories()?;
        let expense = form.validate(&categories)?;

        let limits = self.cache.limits(&self.session)?;
        let evaluation = LimitEvaluator::new(&limits)
            .with_week_window(self.week_window)
            .evaluate(expense.amount, expense.date, today);

        match evaluation {
            LimitEvaluation::NoLimit => self.commit(target, expense).map(SubmitOutcome::Committed),
            LimitEvaluation::Exceeded {
                limit_type,
                limit_value,
            } => {
                tracing::info!(%limit_type, %limit_value, "expense held for confirmation");
                Ok(SubmitOutcome::NeedsConfirmation(PendingExpense {
                    target,
                    expense,
                    limit_type,
                    limit_value,
                    currency: limits.currency_code().to_string(),
                }))
            }
        }
    }

    /// Commit a held expense without re-evaluating it
    pub fn confirm(&self, pending: &PendingExpense) -> ExpensioResult<Committed> {
        self.commit(pending.target, pending.expense.clone())
    }

    fn commit(&self, target: CommitTarget, expense: NewExpense) -> ExpensioResult<Committed> {
        let backend = self.cache.backend();
        let expense = match target {
            CommitTarget::Create => backend.create_expense(expense)?,
            CommitTarget::Update(id) => backend.update_expense(id, expense)?,
        };
        let expenses = backend.list_expenses()?;

        Ok(Committed { expense, expenses })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpensioError;
    use crate::models::BudgetLimits;
    use crate::services::testing::MockBackend;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn daily_100_usd() -> BudgetLimits {
        BudgetLimits {
            daily_limit: Some(Money::from_units(100, 0)),
            currency: Some("USD".into()),
            ..Default::default()
        }
    }

    fn form(amount: &str) -> ExpenseForm {
        ExpenseForm::new("Groceries run", amount, "Food", "2026-10-16")
    }

    #[test]
    fn test_validation_messages() {
        let categories = vec![Category::builtin("Food")];

        let errors = ExpenseForm::default().validate(&categories).unwrap_err();
        assert_eq!(errors.note.as_deref(), Some("Note is required"));
        assert_eq!(errors.amount.as_deref(), Some("Amount is required"));
        assert_eq!(errors.category.as_deref(), Some("Category is required"));
        assert_eq!(errors.date.as_deref(), Some("Date is required"));

        let errors = ExpenseForm::new("x", "-5", "Rent", "16/10/2026")
            .validate(&categories)
            .unwrap_err();
        assert_eq!(errors.note, None);
        assert_eq!(errors.amount.as_deref(), Some("Amount must be a positive number"));
        assert_eq!(errors.category.as_deref(), Some("Unknown category: Rent"));
        assert_eq!(errors.date.as_deref(), Some("Invalid date format"));

        let errors = ExpenseForm::new("x", "abc", "Food", "2026-10-16")
            .validate(&categories)
            .unwrap_err();
        assert_eq!(errors.amount.as_deref(), Some("Amount must be a positive number"));
        assert_eq!(errors.messages().len(), 1);
    }

    #[test]
    fn test_valid_form_builds_expense() {
        let categories = vec![Category::builtin("Food")];
        let expense = ExpenseForm::new(" Lunch ", "12.5", "food", "2026-10-16")
            .validate(&categories)
            .unwrap();

        assert_eq!(expense.note, "Lunch");
        assert_eq!(expense.amount, Money::from_cents(1250));
        assert_eq!(expense.category_id, categories[0].id);
    }

    #[test]
    fn test_sub_cent_amounts_are_rejected() {
        let categories = vec![Category::builtin("Food")];

        for amount in ["0.001", "100.009"] {
            let errors = form(amount).validate(&categories).unwrap_err();
            assert_eq!(
                errors.amount.as_deref(),
                Some("Amount cannot have more than two decimal places")
            );
        }
    }

    #[test]
    fn test_sub_cent_amount_over_limit_is_never_committed() {
        let backend = MockBackend::with_limits(daily_100_usd());
        let cache = SessionCache::new(&backend);
        let service = ExpenseService::new(&cache, SessionId::default());

        let err = service
            .submit(&form("100.009"), CommitTarget::Create, today())
            .unwrap_err();
        assert!(matches!(err, ExpensioError::InvalidForm(_)));
        assert!(backend.expenses().is_empty());

        let outcome = service
            .submit(&form("100.01"), CommitTarget::Create, today())
            .unwrap();
        assert!(matches!(outcome, SubmitOutcome::NeedsConfirmation(_)));
    }

    #[test]
    fn test_invalid_form_blocks_commit() {
        let backend = MockBackend::with_limits(daily_100_usd());
        let cache = SessionCache::new(&backend);
        let service = ExpenseService::new(&cache, SessionId::default());

        let err = service
            .submit(&form("0"), CommitTarget::Create, today())
            .unwrap_err();
        assert!(matches!(err, ExpensioError::InvalidForm(_)));
        assert!(backend.expenses().is_empty());
        assert_eq!(backend.settings_calls(), 0);
    }

    #[test]
    fn test_within_limit_commits_immediately() {
        let backend = MockBackend::with_limits(daily_100_usd());
        let cache = SessionCache::new(&backend);
        let service = ExpenseService::new(&cache, SessionId::default());

        let outcome = service
            .submit(&form("100"), CommitTarget::Create, today())
            .unwrap();

        match outcome {
            SubmitOutcome::Committed(committed) => {
                assert_eq!(committed.expense.amount, Money::from_units(100, 0));
                assert_eq!(committed.expenses.len(), 1);
            }
            other => panic!("expected commit, got {:?}", other),
        }
    }

    #[test]
    fn test_over_limit_then_confirm() {
        let backend = MockBackend::with_limits(daily_100_usd());
        let cache = SessionCache::new(&backend);
        let service = ExpenseService::new(&cache, SessionId::default());
        let input = form("150");

        let pending = match service.submit(&input, CommitTarget::Create, today()).unwrap() {
            SubmitOutcome::NeedsConfirmation(pending) => pending,
            other => panic!("expected confirmation, got {:?}", other),
        };
        assert_eq!(pending.limit_type, LimitType::Daily);
        assert_eq!(pending.limit_value, Money::from_units(100, 0));
        assert_eq!(pending.currency, "USD");
        assert!(backend.expenses().is_empty());

        let committed = service.confirm(&pending).unwrap();
        assert_eq!(committed.expense.amount, Money::from_units(150, 0));
        assert_eq!(backend.expenses().len(), 1);
    }

    #[test]
    fn test_over_limit_then_decline_keeps_form() {
        let backend = MockBackend::with_limits(daily_100_usd());
        let cache = SessionCache::new(&backend);
        let service = ExpenseService::new(&cache, SessionId::default());
        let input = form("150");
        let before = input.clone();

        let outcome = service.submit(&input, CommitTarget::Create, today()).unwrap();
        assert!(matches!(outcome, SubmitOutcome::NeedsConfirmation(_)));
        drop(outcome);

        assert!(backend.expenses().is_empty());
        assert_eq!(input, before);
    }

    #[test]
    fn test_failed_confirm_keeps_pending() {
        let backend = MockBackend::with_limits(daily_100_usd());
        let cache = SessionCache::new(&backend);
        let service = ExpenseService::new(&cache, SessionId::default());

        let pending = match service.submit(&form("150"), CommitTarget::Create, today()).unwrap() {
            SubmitOutcome::NeedsConfirmation(pending) => pending,
            other => panic!("expected confirmation, got {:?}", other),
        };

        backend.set_failing(true);
        let err = service.confirm(&pending).unwrap_err();
        assert!(matches!(err, ExpensioError::Backend(_)));

        backend.set_failing(false);
        service.confirm(&pending).unwrap();
        assert_eq!(backend.expenses().len(), 1);
    }

    #[test]
    fn test_edit_uses_same_evaluation() {
        let backend = MockBackend::with_limits(daily_100_usd());
        let cache = SessionCache::new(&backend);
        let service = ExpenseService::new(&cache, SessionId::default());

        let created = match service.submit(&form("20"), CommitTarget::Create, today()).unwrap() {
            SubmitOutcome::Committed(c) => c.expense,
            other => panic!("expected commit, got {:?}", other),
        };

        let mut edit = ExpenseForm::from_expense(&created);
        edit.amount = "250".into();

        let pending = match service
            .submit(&edit, CommitTarget::Update(created.id), today())
            .unwrap()
        {
            SubmitOutcome::NeedsConfirmation(pending) => pending,
            other => panic!("expected confirmation, got {:?}", other),
        };
        assert_eq!(pending.target, CommitTarget::Update(created.id));

        let committed = service.confirm(&pending).unwrap();
        assert_eq!(committed.expense.id, created.id);
        assert_eq!(committed.expenses.len(), 1);
        assert_eq!(committed.expenses[0].amount, Money::from_units(250, 0));
    }

    #[test]
    fn test_find_by_short_id() {
        let backend = MockBackend::default();
        let cache = SessionCache::new(&backend);
        let service = ExpenseService::new(&cache, SessionId::default());

        let created = match service.submit(&form("5"), CommitTarget::Create, today()).unwrap() {
            SubmitOutcome::Committed(c) => c.expense,
            other => panic!("expected commit, got {:?}", other),
        };

        let short = created.id.to_string();
        assert_eq!(service.find(&short).unwrap().unwrap().id, created.id);
        assert!(service.find("exp-00000000").unwrap().is_none());
    }
}
