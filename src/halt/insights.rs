use super::classify::Need;
use super::config::HaltConfig;
use super::tally::ConcernTally;

pub const NO_DATA_INSIGHT: &str = "No data yet - take your first HALT check to get insights!";

pub const GENERIC_INSIGHT: &str =
    "Keep checking in regularly to discover patterns in your basic needs.";

pub const MULTIPLE_NEEDS_INSIGHT: &str = "You often have several unmet needs at once. \
     Try addressing basic needs first before tackling bigger decisions.";

pub const WELL_MET_INSIGHT: &str =
    "Your basic needs are generally well met. Keep up the good self-care!";

/// Suggestion shown when `need` is the most frequent concern.
pub fn need_suggestion(need: Need) -> &'static str {
    match need {
        Need::Hunger => {
            "Hunger shows up often in your check-ins. Try keeping regular meal times and healthy snacks nearby."
        }
        Need::Anger => {
            "Frustration comes up frequently. Consider a short walk or deep breathing when tension builds."
        }
        Need::Loneliness => {
            "Loneliness is a recurring theme. Reaching out to a friend or scheduling social time could help."
        }
        Need::Tiredness => {
            "Tiredness is your most common concern. Prioritising sleep and rest breaks could make a big difference."
        }
    }
}

/// Rule-based observations about a tally, in a fixed order.
///
/// Rules fire independently; the generic encouragement is used only when none do.
pub fn derive_insights(tally: &ConcernTally, config: &HaltConfig) -> Vec<String> {
    if tally.total_checks == 0 {
        return vec![NO_DATA_INSIGHT.to_string()];
    }

    let mut insights = Vec::new();

    if tally.checks_last_week >= config.frequent_checks_per_week {
        insights.push(format!(
            "Great consistency! You've checked in {} times this week.",
            tally.checks_last_week
        ));
    }

    if tally.total_checks >= config.stale_after_checks && tally.checks_last_week == 0 {
        insights.push(
            "You haven't done a HALT check this week. A quick check-in can help you notice what you need."
                .to_string(),
        );
    }

    if let Some((need, count)) = tally.dominant_need() {
        let share = count as f64 / tally.total_checks as f64;
        if share >= config.dominant_share {
            insights.push(need_suggestion(need).to_string());
        }
    }

    let average = tally.average_concerns();
    if average >= config.multiple_needs_average {
        insights.push(MULTIPLE_NEEDS_INSIGHT.to_string());
    }
    if average < config.well_met_average {
        insights.push(WELL_MET_INSIGHT.to_string());
    }

    if tally.total_checks >= config.milestone_checks {
        insights.push(format!(
            "You've completed {} HALT checks. Self-awareness is a powerful tool!",
            tally.total_checks
        ));
    }

    if insights.is_empty() {
        insights.push(GENERIC_INSIGHT.to_string());
    }

    insights
}
