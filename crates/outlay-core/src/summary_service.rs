//! Aggregation over the filtered expense subset.

use std::collections::HashMap;

use outlay_domain::{Amounted, Category, CategoryTotal, Expense, SpendingSummary};

/// Computes the dashboard statistics from a filtered subset.
pub struct SummaryService;

impl SummaryService {
    /// Sums the subset into totals, per-category groupings, the peak
    /// category, and the budget-relative figures.
    ///
    /// Category totals come back sorted by label. The peak category is the
    /// entry with the highest total; ties resolve to the lexicographically
    /// first label so the result never depends on map iteration order.
    pub fn summarize(expenses: &[Expense], monthly_budget: f64) -> SpendingSummary {
        let mut total_spent = 0.0;
        let mut by_category: HashMap<Category, f64> = HashMap::new();
        for expense in expenses {
            total_spent += expense.amount();
            *by_category.entry(expense.category).or_insert(0.0) += expense.amount();
        }

        let mut category_totals: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect();
        category_totals.sort_by(|a, b| a.category.label().cmp(b.category.label()));

        let peak_category = Self::peak(&category_totals);

        SpendingSummary::from_parts(
            total_spent,
            expenses.len(),
            peak_category,
            category_totals,
            monthly_budget,
        )
    }

    /// First entry holding the maximum total, scanning in label order.
    fn peak(category_totals: &[CategoryTotal]) -> Option<Category> {
        let mut best: Option<&CategoryTotal> = None;
        for entry in category_totals {
            match best {
                Some(current) if entry.total <= current.total => {}
                _ => best = Some(entry),
            }
        }
        best.map(|entry| entry.category)
    }
}
