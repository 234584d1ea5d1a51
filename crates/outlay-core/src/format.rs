//! Display-boundary formatting for currency values and dates.

use chrono::{Datelike, NaiveDate};

use outlay_domain::MonthKey;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    /// Row-level value, two decimal places.
    fn format_amount(&self, amount: f64) -> String;

    /// Large rollup value, rounded to whole units.
    fn format_rollup(&self, amount: f64) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;

    fn format_month(&self, month: MonthKey) -> String;
}

/// en-US dollar formatting matching the dashboard display.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsdFormatter;

impl CurrencyFormatter for UsdFormatter {
    fn format_amount(&self, amount: f64) -> String {
        format!("${}", grouped(amount, 2))
    }

    fn format_rollup(&self, amount: f64) -> String {
        format!("${}", grouped(amount, 0))
    }
}

impl DateFormatter for UsdFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        format!("{} {}, {}", date.format("%b"), date.day(), date.year())
    }

    fn format_month(&self, month: MonthKey) -> String {
        month.label()
    }
}

/// Stat-card caption for budget usage, e.g. "65% of budget".
pub fn budget_trend_label(utilization_percent: f64) -> String {
    if utilization_percent > 100.0 {
        format!(
            "Over budget by {}%",
            (utilization_percent - 100.0).round() as i64
        )
    } else {
        format!("{}% of budget", utilization_percent.round() as i64)
    }
}

/// Rounds to `decimals` places and groups the integer digits in threes.
fn grouped(value: f64, decimals: usize) -> String {
    let rendered = format!("{value:.decimals$}");
    let (number, fraction) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut with_separators = String::new();
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            with_separators.push(',');
        }
        with_separators.push(digit);
    }

    match fraction {
        Some(frac_part) => format!("{sign}{with_separators}.{frac_part}"),
        None => format!("{sign}{with_separators}"),
    }
}
