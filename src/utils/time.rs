use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("failed to parse {field}"))
}

/// Start of the trailing window of `days` days ending at `now`.
/// Windows reaching past the representable range start at `DateTime::MIN_UTC`.
pub fn window_start(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    Duration::try_days(i64::from(days))
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Length of the run of consecutive days ending at `today` (or the day before,
/// when `today` itself has no entry). `days` must be sorted descending and deduplicated.
pub fn trailing_day_streak(days: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&latest) = days.first() else {
        return 0;
    };

    let gap = (today - latest).num_days();
    if !(0..=1).contains(&gap) {
        return 0;
    }

    let mut streak = 1;
    let mut expected = latest;
    for day in &days[1..] {
        match expected.pred_opt() {
            Some(prev) if prev == *day => {
                streak += 1;
                expected = prev;
            }
            _ => break,
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_datetime("2026-03-01T09:30:00+02:00", "timestamp").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-03-01T07:30:00+00:00");
    }

    #[test]
    fn rejects_garbage_timestamp() {
        let err = parse_datetime("yesterday", "timestamp").unwrap_err();
        assert!(err.to_string().contains("timestamp"));
    }

    #[test]
    fn huge_window_covers_everything() {
        let now = parse_datetime("2026-03-01T09:30:00Z", "timestamp").unwrap();
        assert_eq!(window_start(now, u32::MAX), DateTime::<Utc>::MIN_UTC);
        assert_eq!(
            window_start(now, 7),
            parse_datetime("2026-02-22T09:30:00Z", "timestamp").unwrap()
        );
    }

    #[test]
    fn streak_counts_back_from_today() {
        let days = [day(2026, 3, 10), day(2026, 3, 9), day(2026, 3, 8), day(2026, 3, 5)];
        assert_eq!(trailing_day_streak(&days, day(2026, 3, 10)), 3);
    }

    #[test]
    fn streak_survives_until_end_of_next_day() {
        let days = [day(2026, 3, 9), day(2026, 3, 8)];
        assert_eq!(trailing_day_streak(&days, day(2026, 3, 10)), 2);
        assert_eq!(trailing_day_streak(&days, day(2026, 3, 11)), 0);
    }

    #[test]
    fn empty_history_has_no_streak() {
        assert_eq!(trailing_day_streak(&[], day(2026, 3, 10)), 0);
    }
}
