//! Filter selections applied to the expense collection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::common::MonthKey;

/// Restricts the visible expenses to one category, or shows all of them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All categories"),
            CategoryFilter::Only(category) => f.write_str(category.label()),
        }
    }
}

/// Selects a concrete month, or tracks the most recent one in the store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    Latest,
    Month(MonthKey),
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::Latest => f.write_str("Latest month"),
            MonthFilter::Month(key) => write!(f, "{key}"),
        }
    }
}

/// The tuple of filters currently applied to the expense collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilterSelection {
    pub category: CategoryFilter,
    pub month: MonthFilter,
    pub search: String,
}
