//! Resource age formatting
//!
//! Converts a creation timestamp into the short age column shown by
//! `kubectl get`: `HH:MM` for recent objects, `<days>d` past 30 hours.

use chrono::{DateTime, Utc};

/// Ages above this many minutes are displayed in days
const DAYS_THRESHOLD_MINUTES: i64 = 30 * 60;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Format the age of `timestamp` relative to the current time
pub fn time_to_age(timestamp: DateTime<Utc>) -> String {
    age_between(timestamp, Utc::now())
}

/// Format the age of `timestamp` relative to `now`
///
/// The elapsed time is rounded to the nearest minute, half minutes rounding
/// up. Timestamps after `now` are displayed as `00:00`.
pub fn age_between(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = now.signed_duration_since(timestamp).num_milliseconds().max(0);
    let minutes = (elapsed_ms + 30_000) / 60_000;

    if minutes > DAYS_THRESHOLD_MINUTES {
        return format!("{}d", minutes / MINUTES_PER_DAY);
    }
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
