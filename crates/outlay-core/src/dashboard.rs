//! The fully derived view-model for one render of the dashboard.

use serde::Serialize;

use outlay_domain::{Expense, MonthKey, SpendingSummary};

use crate::chart::{ChartService, ChartSlice};
use crate::filter_service::FilterService;
use crate::months::MonthResolver;
use crate::summary_service::SummaryService;
use crate::tracker::Tracker;

/// Everything the dashboard renders for the current tracker state.
///
/// Built fresh on every call; nothing here is cached, so any tracker
/// mutation is reflected by the next build.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Distinct months available in the month selector, most recent first.
    pub months: Vec<MonthKey>,
    /// The concrete month the filter resolved to, if any.
    pub active_month: Option<MonthKey>,
    /// Filtered records, date descending.
    pub expenses: Vec<Expense>,
    pub summary: SpendingSummary,
    pub slices: Vec<ChartSlice>,
}

impl DashboardView {
    pub fn build(tracker: &Tracker) -> Self {
        let months = MonthResolver::buckets(&tracker.expenses);
        let active_month = MonthResolver::resolve(&tracker.expenses, &tracker.filters.month);
        let expenses = FilterService::apply(&tracker.expenses, &tracker.filters, active_month);
        let summary = SummaryService::summarize(&expenses, tracker.config.monthly_budget);
        let slices = ChartService::slices(&summary.category_totals);
        Self {
            months,
            active_month,
            expenses,
            summary,
            slices,
        }
    }
}
