//! Fixed dashboard configuration.

use serde::{Deserialize, Serialize};

/// Session-wide settings applied to a tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    /// Budget ceiling used for the utilization stat.
    #[serde(default = "TrackerConfig::default_monthly_budget")]
    pub monthly_budget: f64,
    #[serde(default = "TrackerConfig::default_currency")]
    pub currency: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            monthly_budget: Self::default_monthly_budget(),
            currency: Self::default_currency(),
        }
    }
}

impl TrackerConfig {
    pub fn default_monthly_budget() -> f64 {
        2500.0
    }

    pub fn default_currency() -> String {
        "USD".into()
    }
}
