//! The fixed expense category set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Categorises an expense for filtering and the spending breakdown.
///
/// The set is closed; free-form strings are accepted only when they match a
/// canonical label exactly (see [`FromStr`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Housing,
    #[serde(rename = "Food & Groceries")]
    FoodGroceries,
    Transportation,
    Utilities,
    #[serde(rename = "Health & Wellness")]
    HealthWellness,
    Entertainment,
    Savings,
    Other,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 8] = [
        Category::Housing,
        Category::FoodGroceries,
        Category::Transportation,
        Category::Utilities,
        Category::HealthWellness,
        Category::Entertainment,
        Category::Savings,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::FoodGroceries => "Food & Groceries",
            Category::Transportation => "Transportation",
            Category::Utilities => "Utilities",
            Category::HealthWellness => "Health & Wellness",
            Category::Entertainment => "Entertainment",
            Category::Savings => "Savings",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == value)
            .ok_or_else(|| CategoryParseError(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised when a string does not name one of the fixed categories.
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a known category", self.0)
    }
}

impl std::error::Error for CategoryParseError {}
