//! Time formatting helpers for reports and the stopwatch display.
//!
//! Two formats are used across the application: the stopwatch format
//! `HH:MM:SS` for live timer output and session durations, and fractional
//! hours with two decimals for goal-hour comparisons.

use chrono::{DateTime, Local};

/// Formats a number of seconds as `HH:MM:SS`.
///
/// Hours grow past two digits for very long sessions rather than wrapping.
///
/// # Examples
///
/// ```
/// use sesl::libs::formatter::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "00:00:00");
/// assert_eq!(format_elapsed(75), "00:01:15");
/// assert_eq!(format_elapsed(3661), "01:01:01");
/// ```
pub fn format_elapsed(secs: u64) -> String {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let rem = secs % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, rem)
}

/// Converts a duration in seconds into fractional hours, rounded to two
/// decimal places. Used when comparing studied time against goal hours.
///
/// # Examples
///
/// ```
/// use sesl::libs::formatter::to_hours;
///
/// assert_eq!(to_hours(3600), 1.0);
/// assert_eq!(to_hours(5400), 1.5);
/// assert_eq!(to_hours(4000), 1.11);
/// ```
pub fn to_hours(secs: i64) -> f64 {
    let hours = secs as f64 / 3600.0;
    (hours * 100.0).round() / 100.0
}

/// Formats a timestamp for table display, e.g. `15 Jan, 2026 14:30`.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format("%d %b, %Y %H:%M").to_string()
}
