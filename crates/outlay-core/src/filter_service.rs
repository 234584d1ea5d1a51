//! Applies the filter selection to the expense collection.

use outlay_domain::{Expense, FilterSelection, MonthKey};

/// Evaluates the category, month, and search predicates and sorts the
/// surviving records for display.
pub struct FilterService;

impl FilterService {
    /// Returns the records satisfying every predicate, sorted by date
    /// descending. Date ties keep their original relative order.
    pub fn apply(
        expenses: &[Expense],
        filters: &FilterSelection,
        active_month: Option<MonthKey>,
    ) -> Vec<Expense> {
        let needle = filters.search.trim().to_lowercase();
        let mut matched: Vec<Expense> = expenses
            .iter()
            .filter(|expense| {
                filters.category.matches(expense.category)
                    && Self::matches_month(expense, active_month)
                    && Self::matches_search(expense, &needle)
            })
            .cloned()
            .collect();
        // Vec::sort_by is stable, so equal dates stay in insertion order
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }

    fn matches_month(expense: &Expense, active_month: Option<MonthKey>) -> bool {
        match active_month {
            Some(month) => MonthKey::from(expense.date) == month,
            None => true,
        }
    }

    fn matches_search(expense: &Expense, needle: &str) -> bool {
        needle.is_empty() || expense.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use outlay_domain::{Category, CategoryFilter, PaymentMethod};
    use uuid::Uuid;

    fn expense(id: u128, description: &str, category: Category, y: i32, m: u32, d: u32) -> Expense {
        Expense::new(
            Uuid::from_u128(id),
            description,
            10.0,
            category,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            PaymentMethod::CreditCard,
        )
    }

    fn march_key() -> MonthKey {
        MonthKey::new(2025, 3).unwrap()
    }

    #[test]
    fn category_filter_keeps_exact_matches_only() {
        let expenses = vec![
            expense(1, "March Rent", Category::Housing, 2025, 3, 1),
            expense(2, "Weekly Groceries", Category::FoodGroceries, 2025, 3, 4),
        ];
        let filters = FilterSelection {
            category: CategoryFilter::Only(Category::Housing),
            ..FilterSelection::default()
        };
        let result = FilterService::apply(&expenses, &filters, None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, Uuid::from_u128(1));
    }

    #[test]
    fn month_predicate_drops_other_buckets() {
        let expenses = vec![
            expense(1, "March Rent", Category::Housing, 2025, 3, 1),
            expense(2, "February Rent", Category::Housing, 2025, 2, 1),
        ];
        let result = FilterService::apply(&expenses, &FilterSelection::default(), Some(march_key()));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "March Rent");
    }

    #[test]
    fn unresolved_month_matches_everything() {
        let expenses = vec![
            expense(1, "March Rent", Category::Housing, 2025, 3, 1),
            expense(2, "February Rent", Category::Housing, 2025, 2, 1),
        ];
        let result = FilterService::apply(&expenses, &FilterSelection::default(), None);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn search_is_a_case_insensitive_substring_match() {
        let expenses = vec![
            expense(1, "Weekly Groceries", Category::FoodGroceries, 2025, 3, 4),
            expense(2, "Gym Membership", Category::HealthWellness, 2025, 3, 5),
        ];
        let filters = FilterSelection {
            search: "gRoCeRies".into(),
            ..FilterSelection::default()
        };
        let result = FilterService::apply(&expenses, &filters, None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "Weekly Groceries");
    }

    #[test]
    fn search_term_is_trimmed_and_empty_terms_match_everything() {
        let expenses = vec![
            expense(1, "Weekly Groceries", Category::FoodGroceries, 2025, 3, 4),
            expense(2, "Gym Membership", Category::HealthWellness, 2025, 3, 5),
        ];
        let filters = FilterSelection {
            search: "  groceries ".into(),
            ..FilterSelection::default()
        };
        assert_eq!(FilterService::apply(&expenses, &filters, None).len(), 1);

        let filters = FilterSelection {
            search: "   ".into(),
            ..FilterSelection::default()
        };
        assert_eq!(FilterService::apply(&expenses, &filters, None).len(), 2);
    }

    #[test]
    fn results_sort_by_date_descending() {
        let expenses = vec![
            expense(1, "Gym Membership", Category::HealthWellness, 2025, 3, 5),
            expense(2, "Emergency Fund", Category::Savings, 2025, 3, 12),
            expense(3, "March Rent", Category::Housing, 2025, 3, 1),
        ];
        let result = FilterService::apply(&expenses, &FilterSelection::default(), None);
        let ids: Vec<Uuid> = result.iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec![
                Uuid::from_u128(2),
                Uuid::from_u128(1),
                Uuid::from_u128(3),
            ]
        );
    }

    #[test]
    fn date_ties_preserve_insertion_order() {
        let expenses = vec![
            expense(1, "Ride Share", Category::Transportation, 2025, 3, 6),
            expense(2, "Lunch Out", Category::FoodGroceries, 2025, 3, 6),
            expense(3, "Movie Night", Category::Entertainment, 2025, 3, 6),
        ];
        let result = FilterService::apply(&expenses, &FilterSelection::default(), None);
        let ids: Vec<Uuid> = result.iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec![Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(3)]
        );
    }

    #[test]
    fn output_is_a_subset_satisfying_every_predicate() {
        let expenses = vec![
            expense(1, "Weekly Groceries", Category::FoodGroceries, 2025, 3, 4),
            expense(2, "Corner-shop groceries", Category::FoodGroceries, 2025, 2, 10),
            expense(3, "Gym Membership", Category::HealthWellness, 2025, 3, 5),
        ];
        let filters = FilterSelection {
            category: CategoryFilter::Only(Category::FoodGroceries),
            search: "groceries".into(),
            ..FilterSelection::default()
        };
        let result = FilterService::apply(&expenses, &filters, Some(march_key()));
        assert_eq!(result.len(), 1);
        let survivor = &result[0];
        assert_eq!(survivor.category, Category::FoodGroceries);
        assert_eq!(MonthKey::from(survivor.date), march_key());
        assert!(survivor.description.to_lowercase().contains("groceries"));
        assert!(expenses.iter().any(|e| e.id == survivor.id));
    }

    #[test]
    fn filtering_is_idempotent_for_unchanged_inputs() {
        let expenses = vec![
            expense(1, "March Rent", Category::Housing, 2025, 3, 1),
            expense(2, "Weekly Groceries", Category::FoodGroceries, 2025, 3, 4),
        ];
        let filters = FilterSelection::default();
        let first = FilterService::apply(&expenses, &filters, Some(march_key()));
        let second = FilterService::apply(&expenses, &filters, Some(march_key()));
        assert_eq!(first, second);
    }
}
