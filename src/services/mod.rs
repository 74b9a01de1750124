//! Service layer for Expensio
//!
//! The service layer sits between the CLI and the [`Backend`](crate::backend::Backend):
//! it caches per-session data, validates forms, evaluates budget limits and
//! filters the transaction list.

pub mod cache;
pub mod category;
pub mod expense;
pub mod limit;
pub mod transactions;

#[cfg(test)]
pub(crate) mod testing;

pub use cache::SessionCache;
pub use category::{merge_categories, resolve_category};
pub use expense::{
    CommitTarget, Committed, ExpenseForm, ExpenseService, PendingExpense, SubmitOutcome,
};
pub use limit::{classify_period, evaluate, select_limit_type, LimitEvaluator, PeriodFlags};
pub use transactions::{PeriodCursor, TransactionQuery, ViewMode, VisibleRows};
