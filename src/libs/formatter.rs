//! Formatting helpers shared by the views and command output.

use chrono::{Duration, NaiveDate};

/// Formats a duration as `HH:MM`. Negative durations clamp to zero.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a minute total as `HH:MM`.
pub fn format_minutes(minutes: u64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats a countdown as `MM:SS` for the in-terminal session timer.
pub fn format_countdown(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Short `DD-MM-YYYY` rendering used in tables.
pub fn short_date(date: &NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}
