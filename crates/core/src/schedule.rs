//! Countdown labels and time-phase classification
//!
//! Pure, idempotent reads. Callers poll on whatever cadence suits them
//! (the reference UI refreshes once a minute); nothing here runs a timer.

use chrono::{DateTime, Duration, Utc};

/// How long after its start a hangout still counts as happening
fn happening_window() -> Duration {
    Duration::hours(3)
}

/// A hangout's position relative to `now`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Upcoming,
    /// Started within the last three hours
    Happening,
    Past,
}

pub fn phase(target: DateTime<Utc>, now: DateTime<Utc>) -> Phase {
    if target > now {
        Phase::Upcoming
    } else if now - target <= happening_window() {
        Phase::Happening
    } else {
        Phase::Past
    }
}

/// Time-remaining badge text.
///
/// Buckets: whole days once at least a day out, hours with a minute
/// remainder under a day, bare minutes under an hour, "Started" once the
/// target has passed.
pub fn countdown_label(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = target - now;
    if remaining <= Duration::zero() {
        return "Started".to_string();
    }

    let hours = remaining.num_hours();
    let minutes = remaining.num_minutes() % 60;
    let days = hours / 24;

    if days > 0 {
        format!("In {days}d")
    } else if hours > 0 {
        format!("In {hours}h {minutes}m")
    } else {
        format!("In {minutes}m")
    }
}
