//! Aggregate result models for the dashboard stat cards.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Summed spending for a single category present in the filtered subset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Computed statistics for the currently filtered subset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingSummary {
    pub total_spent: f64,
    pub transaction_count: usize,
    pub average_transaction: f64,
    /// `None` is the "N/A" sentinel for an empty subset.
    pub peak_category: Option<Category>,
    pub utilization_percent: f64,
    pub remaining_budget: f64,
    /// Sorted by category label; only categories with at least one record.
    pub category_totals: Vec<CategoryTotal>,
}

impl SpendingSummary {
    /// Derives the averaged and budget-relative figures from raw totals.
    pub fn from_parts(
        total_spent: f64,
        transaction_count: usize,
        peak_category: Option<Category>,
        category_totals: Vec<CategoryTotal>,
        monthly_budget: f64,
    ) -> Self {
        let average_transaction = if transaction_count > 0 {
            total_spent / transaction_count as f64
        } else {
            0.0
        };
        let utilization_percent = if monthly_budget > 0.0 {
            (total_spent / monthly_budget) * 100.0
        } else {
            0.0
        };
        let remaining_budget = (monthly_budget - total_spent).max(0.0);
        Self {
            total_spent,
            transaction_count,
            average_transaction,
            peak_category,
            utilization_percent,
            remaining_budget,
            category_totals,
        }
    }

    /// Label shown on the peak-category stat card.
    pub fn peak_category_label(&self) -> &'static str {
        self.peak_category
            .map(|category| category.label())
            .unwrap_or("N/A")
    }
}
