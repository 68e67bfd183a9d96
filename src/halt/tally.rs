use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ReflectionEntry;
use crate::utils::time::{trailing_day_streak, window_start};

use super::classify::{classify, Need};
use super::config::HaltConfig;

/// Per-need concern counts and check-in frequency over a set of HALT entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcernTally {
    pub hungry_concerns: usize,
    pub angry_concerns: usize,
    pub lonely_concerns: usize,
    pub tired_concerns: usize,
    pub total_checks: usize,
    pub checks_last_week: usize,
    pub checks_last_month: usize,
    pub last_check: Option<DateTime<Utc>>,
    pub current_streak_days: u32,
}

impl ConcernTally {
    pub fn count(&self, need: Need) -> usize {
        match need {
            Need::Hunger => self.hungry_concerns,
            Need::Anger => self.angry_concerns,
            Need::Loneliness => self.lonely_concerns,
            Need::Tiredness => self.tired_concerns,
        }
    }

    fn count_mut(&mut self, need: Need) -> &mut usize {
        match need {
            Need::Hunger => &mut self.hungry_concerns,
            Need::Anger => &mut self.angry_concerns,
            Need::Loneliness => &mut self.lonely_concerns,
            Need::Tiredness => &mut self.tired_concerns,
        }
    }

    pub fn total_concerns(&self) -> usize {
        Need::ALL.iter().map(|need| self.count(*need)).sum()
    }

    /// Concerns per check, 0 when there are no checks.
    pub fn average_concerns(&self) -> f64 {
        if self.total_checks == 0 {
            return 0.0;
        }
        self.total_concerns() as f64 / self.total_checks as f64
    }

    /// Need with the most concerns; ties go to the earlier need in HALT order.
    pub fn dominant_need(&self) -> Option<(Need, usize)> {
        Need::ALL
            .iter()
            .map(|need| (*need, self.count(*need)))
            .filter(|(_, count)| *count > 0)
            .fold(None, |best, (need, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((need, count)),
            })
    }
}

/// Tally concerns across `entries` as of `now`.
///
/// Each entry counts at most once per need. `last_check` keeps the first
/// entry, in input order, among those sharing the latest timestamp.
pub fn aggregate<'a, I>(entries: I, now: DateTime<Utc>, config: &HaltConfig) -> ConcernTally
where
    I: IntoIterator<Item = &'a ReflectionEntry>,
{
    let week_start = window_start(now, config.week_days);
    let month_start = window_start(now, config.month_days);

    let mut tally = ConcernTally::default();
    let mut days: Vec<NaiveDate> = Vec::new();

    for entry in entries {
        tally.total_checks += 1;

        let mut seen = [false; 4];
        for need in entry.responses.iter().filter_map(classify) {
            let slot = &mut seen[need as usize];
            if !*slot {
                *slot = true;
                *tally.count_mut(need) += 1;
            }
        }

        if entry.timestamp > week_start {
            tally.checks_last_week += 1;
        }
        if entry.timestamp > month_start {
            tally.checks_last_month += 1;
        }

        match tally.last_check {
            Some(latest) if latest >= entry.timestamp => {}
            _ => tally.last_check = Some(entry.timestamp),
        }

        if entry.timestamp <= now {
            days.push(entry.timestamp.date_naive());
        }
    }

    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();
    tally.current_streak_days = trailing_day_streak(&days, now.date_naive());

    tally
}
