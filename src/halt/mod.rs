pub mod classify;
pub mod config;
pub mod insights;
pub mod tally;

pub use classify::{classify, Need};
pub use config::HaltConfig;
pub use insights::{derive_insights, NO_DATA_INSIGHT};
pub use tally::{aggregate, ConcernTally};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::log_debug;
use crate::models::ReflectionEntry;

const ENABLE_LOGS: bool = true;

/// Tally plus the insights derived from it, as shown on the HALT history screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HaltReport {
    pub tally: ConcernTally,
    pub insights: Vec<String>,
}

/// Analyzer bound to one set of thresholds.
#[derive(Debug, Clone, Default)]
pub struct HaltAnalyzer {
    config: HaltConfig,
}

impl HaltAnalyzer {
    pub fn new(config: HaltConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HaltConfig {
        &self.config
    }

    pub fn aggregate<'a, I>(&self, entries: I) -> ConcernTally
    where
        I: IntoIterator<Item = &'a ReflectionEntry>,
    {
        self.aggregate_at(entries, Utc::now())
    }

    pub fn aggregate_at<'a, I>(&self, entries: I, now: DateTime<Utc>) -> ConcernTally
    where
        I: IntoIterator<Item = &'a ReflectionEntry>,
    {
        let tally = aggregate(entries, now, &self.config);
        log_debug!(
            "HALT tally: {} checks ({} this week), concerns H{} A{} L{} T{}",
            tally.total_checks,
            tally.checks_last_week,
            tally.hungry_concerns,
            tally.angry_concerns,
            tally.lonely_concerns,
            tally.tired_concerns
        );
        tally
    }

    pub fn insights(&self, tally: &ConcernTally) -> Vec<String> {
        derive_insights(tally, &self.config)
    }

    pub fn report_at<'a, I>(&self, entries: I, now: DateTime<Utc>) -> HaltReport
    where
        I: IntoIterator<Item = &'a ReflectionEntry>,
    {
        let tally = self.aggregate_at(entries, now);
        let insights = self.insights(&tally);
        HaltReport { tally, insights }
    }

    pub fn report<'a, I>(&self, entries: I) -> HaltReport
    where
        I: IntoIterator<Item = &'a ReflectionEntry>,
    {
        self.report_at(entries, Utc::now())
    }
}
