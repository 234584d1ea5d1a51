//! Resolves the year-month buckets present in the expense collection.

use std::collections::BTreeSet;

use outlay_domain::{Expense, MonthFilter, MonthKey};

/// Derives month buckets and resolves the "latest month" sentinel.
pub struct MonthResolver;

impl MonthResolver {
    /// Returns the distinct buckets in the collection, most recent first.
    pub fn buckets(expenses: &[Expense]) -> Vec<MonthKey> {
        let unique: BTreeSet<MonthKey> = expenses
            .iter()
            .map(|expense| MonthKey::from(expense.date))
            .collect();
        unique.into_iter().rev().collect()
    }

    /// Returns the most recent bucket, or `None` for an empty collection.
    pub fn latest(expenses: &[Expense]) -> Option<MonthKey> {
        expenses
            .iter()
            .map(|expense| MonthKey::from(expense.date))
            .max()
    }

    /// Resolves `filter` to the concrete active month.
    ///
    /// `Latest` over an empty collection yields `None`, which downstream
    /// filtering treats as "match every record".
    pub fn resolve(expenses: &[Expense], filter: &MonthFilter) -> Option<MonthKey> {
        match filter {
            MonthFilter::Month(key) => Some(*key),
            MonthFilter::Latest => Self::latest(expenses),
        }
    }
}
