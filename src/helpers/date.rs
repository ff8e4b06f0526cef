//! Date labels for listings and related links

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write;

/// Used when a configured `date_format` cannot be rendered
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether `format` is a usable chrono strftime string
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Format a date with a chrono strftime string.
/// An unusable format falls back to `%Y-%m-%d` instead of panicking.
pub fn format_date(date: &DateTime<Utc>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_ok() {
        return out;
    }
    tracing::debug!("Unusable date format {:?}", format);
    date.format(DEFAULT_DATE_FORMAT).to_string()
}

/// `publishedAt` as emitted in JSON: RFC 3339 with milliseconds
pub fn date_xml(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, false)
}

/// Relative label ("3 days ago") measured against `now`.
///
/// Labels switch at Moment's humanize thresholds, so 320 days already reads
/// as a year.
pub fn time_ago(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*date).num_seconds();
    if seconds < 0 {
        return "in the future".to_string();
    }

    let minutes = (seconds + 30) / 60;
    let hours = (minutes + 30) / 60;
    let days = (hours + 12) / 24;

    if seconds < 45 {
        "a few seconds ago".to_string()
    } else if seconds < 90 {
        "a minute ago".to_string()
    } else if minutes < 45 {
        format!("{} minutes ago", minutes)
    } else if minutes < 90 {
        "an hour ago".to_string()
    } else if hours < 22 {
        format!("{} hours ago", hours)
    } else if hours < 36 {
        "a day ago".to_string()
    } else if days < 26 {
        format!("{} days ago", days)
    } else if days < 45 {
        "a month ago".to_string()
    } else if days < 320 {
        let months = ((days as f64 / 30.4375).round() as i64).max(2);
        format!("{} months ago", months)
    } else if days < 548 {
        "a year ago".to_string()
    } else {
        let years = ((days as f64 / 365.25).round() as i64).max(2);
        format!("{} years ago", years)
    }
}
