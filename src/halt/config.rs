use serde::{Deserialize, Serialize};

/// Tunable thresholds for HALT aggregation and insight rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HaltConfig {
    /// Checks in the last week that earn the "keep it up" insight
    pub frequent_checks_per_week: usize,

    /// Minimum history before a quiet week triggers a nudge
    pub stale_after_checks: usize,

    /// Share of checks a single need must reach to be called out
    pub dominant_share: f64,

    /// Average concerns per check at or above which several needs are unmet
    pub multiple_needs_average: f64,

    /// Average concerns per check below which needs are considered well met
    pub well_met_average: f64,

    pub milestone_checks: usize,

    /// Window lengths, in days
    pub week_days: u32,
    pub month_days: u32,
}

impl Default for HaltConfig {
    fn default() -> Self {
        Self {
            frequent_checks_per_week: 2,
            stale_after_checks: 3,
            dominant_share: 0.30,
            multiple_needs_average: 2.0,
            well_met_average: 0.5,
            milestone_checks: 5,
            week_days: 7,
            month_days: 30,
        }
    }
}
