//! Example records pre-loaded into a fresh session.

use chrono::NaiveDate;

use outlay_domain::{Category, Expense, PaymentMethod};

use crate::id::IdProvider;

/// Builds the seven startup records, oldest first.
pub fn seed_expenses(ids: &dyn IdProvider) -> Vec<Expense> {
    let records = [
        (
            "March Rent",
            1200.0,
            Category::Housing,
            (2025, 3, 1),
            PaymentMethod::BankTransfer,
        ),
        (
            "Weekly Groceries",
            86.43,
            Category::FoodGroceries,
            (2025, 3, 4),
            PaymentMethod::DebitCard,
        ),
        (
            "Gym Membership",
            49.99,
            Category::HealthWellness,
            (2025, 3, 5),
            PaymentMethod::CreditCard,
        ),
        (
            "Ride Share",
            18.5,
            Category::Transportation,
            (2025, 3, 6),
            PaymentMethod::CreditCard,
        ),
        (
            "Electric Bill",
            92.11,
            Category::Utilities,
            (2025, 3, 8),
            PaymentMethod::BankTransfer,
        ),
        (
            "Movie Night",
            32.0,
            Category::Entertainment,
            (2025, 3, 9),
            PaymentMethod::CreditCard,
        ),
        (
            "Emergency Fund",
            150.0,
            Category::Savings,
            (2025, 3, 12),
            PaymentMethod::BankTransfer,
        ),
    ];

    records
        .into_iter()
        .map(|(description, amount, category, (y, m, d), payment_method)| {
            Expense::new(
                ids.next_id(),
                description,
                amount,
                category,
                NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                payment_method,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIds;
    use std::collections::HashSet;
    use uuid::Uuid;

    #[test]
    fn seed_covers_seven_distinct_records() {
        let expenses = seed_expenses(&SequentialIds::new());
        assert_eq!(expenses.len(), 7);
        let ids: HashSet<Uuid> = expenses.iter().map(|expense| expense.id).collect();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn seed_records_all_land_in_march_2025() {
        let expenses = seed_expenses(&SequentialIds::new());
        assert!(expenses
            .iter()
            .all(|expense| expense.date.format("%Y-%m").to_string() == "2025-03"));
    }

    #[test]
    fn seed_amounts_sum_to_the_expected_total() {
        let expenses = seed_expenses(&SequentialIds::new());
        let total: f64 = expenses.iter().map(|expense| expense.amount).sum();
        assert!((total - 1629.03).abs() < 1e-9);
    }
}
