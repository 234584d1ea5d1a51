//! Layout-ready data for the category breakdown chart.

use serde::Serialize;

use outlay_domain::CategoryTotal;

/// Fill colors cycled across the breakdown tiles.
pub const PALETTE: [&str; 8] = [
    "#38bdf8", "#c084fc", "#22d3ee", "#f97316", "#f472b6", "#a3e635", "#facc15", "#818cf8",
];

/// One tile of the category breakdown.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub magnitude: f64,
    pub color: &'static str,
}

/// Maps category totals onto labeled, colored slices.
pub struct ChartService;

impl ChartService {
    /// Assigns palette colors by position. The input arrives label-sorted
    /// from the aggregator, so a category keeps its color as long as the
    /// set of present categories is unchanged.
    pub fn slices(category_totals: &[CategoryTotal]) -> Vec<ChartSlice> {
        category_totals
            .iter()
            .enumerate()
            .map(|(index, entry)| ChartSlice {
                label: entry.category.label(),
                magnitude: entry.total,
                color: PALETTE[index % PALETTE.len()],
            })
            .collect()
    }
}
