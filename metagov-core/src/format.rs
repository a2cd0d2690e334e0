//! Relative time copy ("in 3 hours", "2 days ago").

use chrono::{DateTime, Utc};

/// Turns an absolute instant into text relative to `now`.
pub trait RelativeTimeFormatter {
    fn from_now(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> String;
}

/// Rounded, single-unit phrasing with the usual web thresholds: under 45
/// seconds is "a few seconds", under 90 seconds "a minute", under 45 minutes
/// "N minutes", and so on up to years.
#[derive(Debug, Clone, Copy, Default)]
pub struct Humanized;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
// average Gregorian month in seconds
const MONTH: i64 = 2_629_746;

fn round_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

/// "N units", or the singular phrase once rounding lands on one.
fn count(n: i64, singular: &str, unit: &str) -> String {
    if n <= 1 {
        singular.to_string()
    } else {
        format!("{} {}", n, unit)
    }
}

impl Humanized {
    /// Magnitude phrase without direction, e.g. "3 hours".
    pub fn span(secs: i64) -> String {
        let secs = secs.abs();
        if secs < 45 {
            return "a few seconds".to_string();
        }
        if secs < 90 {
            return "a minute".to_string();
        }
        let minutes = round_div(secs, MINUTE);
        if minutes < 45 {
            return count(minutes, "a minute", "minutes");
        }
        if minutes < 90 {
            return "an hour".to_string();
        }
        let hours = round_div(secs, HOUR);
        if hours < 22 {
            return count(hours, "an hour", "hours");
        }
        if hours < 36 {
            return "a day".to_string();
        }
        let days = round_div(secs, DAY);
        if days < 26 {
            return count(days, "a day", "days");
        }
        if days < 46 {
            return "a month".to_string();
        }
        let months = round_div(secs, MONTH);
        if months < 11 {
            return count(months, "a month", "months");
        }
        if months < 18 {
            return "a year".to_string();
        }
        count(round_div(months, 12), "a year", "years")
    }
}

impl RelativeTimeFormatter for Humanized {
    fn from_now(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let secs = (instant - now).num_seconds();
        let span = Self::span(secs);
        if secs >= 0 {
            format!("in {}", span)
        } else {
            format!("{} ago", span)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn rel(offset: Duration) -> String {
        Humanized.from_now(now() + offset, now())
    }

    #[test]
    fn test_future_phrases() {
        assert_eq!(rel(Duration::seconds(10)), "in a few seconds");
        assert_eq!(rel(Duration::seconds(60)), "in a minute");
        assert_eq!(rel(Duration::minutes(5)), "in 5 minutes");
        assert_eq!(rel(Duration::minutes(50)), "in an hour");
        assert_eq!(rel(Duration::hours(3)), "in 3 hours");
        assert_eq!(rel(Duration::hours(30)), "in a day");
        assert_eq!(rel(Duration::days(4)), "in 4 days");
        assert_eq!(rel(Duration::days(30)), "in a month");
        assert_eq!(rel(Duration::days(120)), "in 4 months");
        assert_eq!(rel(Duration::days(400)), "in a year");
        assert_eq!(rel(Duration::days(1_100)), "in 3 years");
    }

    #[test]
    fn test_past_phrases() {
        assert_eq!(rel(Duration::hours(-2)), "2 hours ago");
        assert_eq!(rel(Duration::days(-2)), "2 days ago");
        assert_eq!(rel(Duration::seconds(-5)), "a few seconds ago");
    }

    #[test]
    fn test_rounding_at_boundaries() {
        // 89 seconds is still "a minute", 90 rounds up to 2 minutes
        assert_eq!(Humanized::span(89), "a minute");
        assert_eq!(Humanized::span(90), "2 minutes");
        assert_eq!(Humanized::span(21 * HOUR + 29 * MINUTE), "21 hours");
        assert_eq!(Humanized::span(36 * HOUR), "2 days");
    }

    #[test]
    fn test_next_unit_rounding_to_one_is_singular() {
        // 89.5 minutes passes the minute bands but rounds to one hour
        assert_eq!(Humanized::span(89 * MINUTE + 30), "an hour");
        assert_eq!(Humanized::span(35 * HOUR + 30 * MINUTE), "a day");
        assert_eq!(Humanized::span(45 * DAY + 12 * HOUR), "a month");
        assert_eq!(rel(Duration::seconds(-(89 * MINUTE + 30))), "an hour ago");
    }
}
