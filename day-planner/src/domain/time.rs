//! Wall-clock formatting helpers.
//!
//! Plans are computed on local `NaiveDateTime` values with full precision
//! and only rounded to minutes for display.

use chrono::{Duration, NaiveDateTime};

/// Format a timestamp as "HH:MM".
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use day_planner::domain::format_hhmm;
///
/// let t = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(9, 5, 42)
///     .unwrap();
/// assert_eq!(format_hhmm(&t), "09:05");
/// ```
pub fn format_hhmm(time: &NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}

/// Format a duration as "25m" or "1h 5m". Seconds are truncated.
pub fn format_duration(duration: Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}
