//! Time utilities: parsing HH:MM, 12-hour formatting, hour rounding.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Minutes from `start` to `end` on the same day (negative if `end` is earlier).
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// `08:00` → `8:00 AM`, `13:05` → `1:05 PM`, `00:30` → `12:30 AM`.
pub fn format_time_12h(t: NaiveTime) -> String {
    let (pm, hour12) = t.hour12();
    let suffix = if pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour12, t.minute(), suffix)
}

pub fn format_time_24h(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn format_optional_time(t: Option<NaiveTime>) -> String {
    t.map(format_time_24h).unwrap_or_else(|| "--:--".to_string())
}

/// Round to 2 decimal places, the precision hours are stored and shown with.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
