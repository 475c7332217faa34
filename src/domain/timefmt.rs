// SPDX-License-Identifier: MPL-2.0
//! Relative timestamp formatting for post cards.

use crate::domain::post::Timestamp;
use chrono::{DateTime, Utc};

/// Placeholder shown while a post's timestamp has not resolved yet.
pub const PLACEHOLDER: &str = "…";

/// Formats a post timestamp relative to `now`, falling back to the
/// placeholder for the server-assigned sentinel.
#[must_use]
pub fn relative(timestamp: Timestamp, now: DateTime<Utc>) -> String {
    match timestamp.resolved() {
        Some(instant) => relative_from(instant, now),
        None => PLACEHOLDER.to_string(),
    }
}

fn relative_from(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(instant);

    // Clock skew between client and store can yield slightly-future posts.
    if delta.num_seconds() < 0 {
        return "now".to_string();
    }

    let seconds = delta.num_seconds();
    if seconds < 60 {
        return "now".to_string();
    }

    let minutes = delta.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = delta.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = delta.num_days();
    if days < 7 {
        return plural(days, "day");
    }

    let weeks = days / 7;
    if weeks < 5 {
        return plural(weeks, "week");
    }

    let months = days / 30;
    if months < 12 {
        return plural(months, "month");
    }

    plural(days / 365, "year")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
