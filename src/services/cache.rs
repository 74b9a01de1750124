//! Per-session read-through cache
//!
//! Budget limits and the merged category list are fetched from the backend
//! the first time a session asks for them and kept until the session is
//! refreshed or invalidated. There is no time-based expiry.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::backend::{Backend, SessionId};
use crate::error::{ExpensioError, ExpensioResult};
use crate::models::{BudgetLimits, Category};

use super::category::merge_categories;

#[derive(Debug, Clone, Default)]
struct SessionEntry {
    limits: Option<BudgetLimits>,
    categories: Option<Vec<Category>>,
}

/// Read-through cache of limits and categories, keyed by session
pub struct SessionCache<B> {
    backend: B,
    entries: RwLock<HashMap<SessionId, SessionEntry>>,
}

impl<B: Backend> SessionCache<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The backend the cache reads through to
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Budget limits for `session`, fetched on first use
    pub fn limits(&self, session: &SessionId) -> ExpensioResult<BudgetLimits> {
        if let Some(limits) = self.read_entry(session, |e| e.limits.clone())? {
            tracing::debug!(%session, "limits cache hit");
            return Ok(limits);
        }

        tracing::debug!(%session, "limits cache miss");
        let limits = self.backend.fetch_settings()?;
        self.write_entry(session, |e| e.limits = Some(limits.clone()))?;
        Ok(limits)
    }

    /// Merged user + default categories for `session`, fetched on first use
    pub fn categories(&self, session: &SessionId) -> ExpensioResult<Vec<Category>> {
        if let Some(categories) = self.read_entry(session, |e| e.categories.clone())? {
            tracing::debug!(%session, "categories cache hit");
            return Ok(categories);
        }

        tracing::debug!(%session, "categories cache miss");
        let categories = self.fetch_categories()?;
        self.write_entry(session, |e| e.categories = Some(categories.clone()))?;
        Ok(categories)
    }

    /// Re-fetch both limits and categories for `session`
    ///
    /// The cached values are only replaced once both fetches succeed.
    pub fn refresh(&self, session: &SessionId) -> ExpensioResult<()> {
        let limits = self.backend.fetch_settings()?;
        let categories = self.fetch_categories()?;

        self.write_entry(session, |e| {
            e.limits = Some(limits);
            e.categories = Some(categories);
        })?;

        tracing::debug!(%session, "session cache refreshed");
        Ok(())
    }

    /// Drop everything cached for `session`
    pub fn invalidate(&self, session: &SessionId) -> ExpensioResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.remove(session);
        Ok(())
    }

    fn fetch_categories(&self) -> ExpensioResult<Vec<Category>> {
        let user = self.backend.fetch_user_categories()?;
        let defaults = self.backend.fetch_default_categories()?;
        Ok(merge_categories(user, defaults))
    }

    fn read_entry<T>(
        &self,
        session: &SessionId,
        f: impl FnOnce(&SessionEntry) -> Option<T>,
    ) -> ExpensioResult<Option<T>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.get(session).and_then(f))
    }

    fn write_entry(&self, session: &SessionId, f: impl FnOnce(&mut SessionEntry)) -> ExpensioResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| ExpensioError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        f(entries.entry(session.clone()).or_default());
        Ok(())
    }
}
