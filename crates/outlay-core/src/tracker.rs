//! The in-memory session state: expense records plus filter selections.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use outlay_domain::{
    CategoryFilter, Displayable, Expense, FilterSelection, Identifiable, MonthFilter,
};

use crate::config::TrackerConfig;
use crate::id::IdProvider;
use crate::seed::seed_expenses;

/// Owns the expense collection and the active filter selection for one
/// dashboard session.
///
/// All mutations go through the defined operations; derived views are
/// recomputed on demand from this state (see [`crate::DashboardView`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracker {
    pub expenses: Vec<Expense>,
    pub filters: FilterSelection,
    pub config: TrackerConfig,
}

impl Tracker {
    /// Creates an empty session.
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            expenses: Vec::new(),
            filters: FilterSelection::default(),
            config,
        }
    }

    /// Creates a session pre-loaded with the seven example records.
    pub fn with_seed_data(config: TrackerConfig, ids: &dyn IdProvider) -> Self {
        let mut tracker = Self::new(config);
        tracker.expenses = seed_expenses(ids);
        tracker
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.expense(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Inserts a record at the head of the collection.
    ///
    /// Callers are responsible for id uniqueness; validated submission goes
    /// through [`crate::ExpenseService::add`].
    pub fn insert_expense(&mut self, expense: Expense) {
        debug!(id = %expense.id, expense = %expense.display_label(), "insert expense");
        self.expenses.insert(0, expense);
    }

    /// Removes the record with `id`. Returns `false` when it was absent,
    /// which is a valid outcome rather than an error.
    pub fn remove_expense(&mut self, id: Uuid) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id() != id);
        let removed = self.expenses.len() != before;
        debug!(%id, removed, "remove expense");
        removed
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        debug!(filter = %filter, "set category filter");
        self.filters.category = filter;
    }

    pub fn set_month_filter(&mut self, filter: MonthFilter) {
        debug!(filter = %filter, "set month filter");
        self.filters.month = filter;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filters.search = term.into();
        debug!(term = %self.filters.search, "set search term");
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
