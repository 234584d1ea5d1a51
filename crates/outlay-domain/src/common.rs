//! Shared traits and time primitives for expense records.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities held by the tracker.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// A calendar year-month bucket used for grouping and filtering.
///
/// Keys order chronologically and render as `YYYY-MM`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the human-readable label, e.g. "March 2025".
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl From<NaiveDate> for MonthKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (year, month) = value
            .split_once('-')
            .ok_or_else(|| MonthKeyError::Malformed(value.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| MonthKeyError::Malformed(value.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthKeyError::Malformed(value.to_string()))?;
        Self::new(year, month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors that can occur when constructing [`MonthKey`] values.
pub enum MonthKeyError {
    MonthOutOfRange(u32),
    Malformed(String),
}

impl fmt::Display for MonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKeyError::MonthOutOfRange(month) => {
                write!(f, "month {month} is outside 1..=12")
            }
            MonthKeyError::Malformed(value) => {
                write!(f, "`{value}` is not a YYYY-MM month key")
            }
        }
    }
}

impl std::error::Error for MonthKeyError {}
