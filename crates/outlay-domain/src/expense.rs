//! Domain models for expense records and their submission drafts.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::Category;
use crate::common::*;

/// One user-entered expense transaction.
///
/// Invariants: `description` is non-empty and trimmed, `amount` is positive
/// and finite, `id` is unique within its tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
}

impl Expense {
    pub fn new(
        id: Uuid,
        description: impl Into<String>,
        amount: f64,
        category: Category,
        date: NaiveDate,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category,
            date,
            payment_method,
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.description, self.category)
    }
}

/// Unvalidated form input for a new expense.
///
/// `category` and `date` stay optional so an unfilled form control surfaces
/// as a field error instead of a fabricated value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: f64,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl ExpenseDraft {
    /// Builds a fully-populated draft with the default payment method.
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: Some(category),
            date: Some(date),
            payment_method: PaymentMethod::default(),
        }
    }

    pub fn with_payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }
}

/// Supported payment methods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    Cash,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Digital Wallet")]
    DigitalWallet,
}

impl PaymentMethod {
    /// Every payment method in display order.
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Cash,
        PaymentMethod::BankTransfer,
        PaymentMethod::DigitalWallet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::DigitalWallet => "Digital Wallet",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentMethodParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.label() == value)
            .ok_or_else(|| PaymentMethodParseError(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised when a string does not name one of the fixed payment methods.
pub struct PaymentMethodParseError(pub String);

impl fmt::Display for PaymentMethodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a known payment method", self.0)
    }
}

impl std::error::Error for PaymentMethodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn draft_defaults_to_credit_card() {
        let draft = ExpenseDraft::new(
            "Weekly Groceries",
            86.43,
            Category::FoodGroceries,
            sample_date(2025, 3, 4),
        );
        assert_eq!(draft.payment_method, PaymentMethod::CreditCard);
    }

    #[test]
    fn payment_methods_round_trip_through_parsing() {
        for method in PaymentMethod::ALL {
            let parsed: PaymentMethod = method.label().parse().expect("label parses");
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn expense_serializes_with_canonical_labels() {
        let expense = Expense::new(
            Uuid::nil(),
            "March Rent",
            1200.0,
            Category::Housing,
            sample_date(2025, 3, 1),
            PaymentMethod::BankTransfer,
        );
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["category"], "Housing");
        assert_eq!(json["payment_method"], "Bank Transfer");
    }
}
