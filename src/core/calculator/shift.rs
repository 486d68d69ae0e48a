//! Billable hours for one shift.
//!
//! A late clock-in inside the grace window is credited from the scheduled
//! time-in; on-time, early, and beyond-grace clock-ins use the actual start.

use crate::models::settings::AttendanceSettings;
use crate::utils::time::{minutes_between, round2};
use chrono::NaiveTime;

const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftCalculation {
    /// Full precision; see [`ShiftCalculation::rounded_hours`] for storage.
    pub hours: f64,
    pub adjusted_start_time: Option<NaiveTime>,
    pub was_adjusted: bool,
}

impl ShiftCalculation {
    pub fn rounded_hours(&self) -> f64 {
        round2(self.hours)
    }
}

/// Compute billable hours with grace-window reconciliation and lunch deduction.
///
/// Missing start or end yields zero hours and no adjustment.
pub fn compute_shift(
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    scheduled_time_in: NaiveTime,
    grace_window_minutes: u32,
    lunch_break_hours: f64,
) -> ShiftCalculation {
    let (Some(start), Some(end)) = (start, end) else {
        return ShiftCalculation {
            hours: 0.0,
            adjusted_start_time: start,
            was_adjusted: false,
        };
    };

    let diff = minutes_between(scheduled_time_in, start);
    let effective_start = if diff > 0 && diff <= i64::from(grace_window_minutes) {
        scheduled_time_in
    } else {
        start
    };

    let worked = shift_minutes(effective_start, end) as f64 / 60.0;
    let hours = (worked - lunch_break_hours.max(0.0)).max(0.0);

    ShiftCalculation {
        hours,
        adjusted_start_time: Some(effective_start),
        was_adjusted: effective_start != start,
    }
}

/// [`compute_shift`] driven by the user's stored settings.
pub fn compute_shift_with(
    settings: &AttendanceSettings,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    lunch_break_hours: f64,
) -> ShiftCalculation {
    compute_shift(
        start,
        end,
        settings.scheduled_time_in,
        settings.grace_window_minutes,
        lunch_break_hours,
    )
}

/// Hours between start and end with overnight rollover only, no grace window
/// and no lunch deduction. Missing times yield zero.
pub fn raw_shift_hours(start: Option<NaiveTime>, end: Option<NaiveTime>) -> f64 {
    match (start, end) {
        (Some(s), Some(e)) => shift_minutes(s, e) as f64 / 60.0,
        _ => 0.0,
    }
}

/// Minutes from `start` to `end`; an end at or before the start belongs to the
/// next day. Rolls over once, so shifts of 24h or more are not representable.
fn shift_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    let minutes = minutes_between(start, end);
    if minutes <= 0 {
        minutes + MINUTES_PER_DAY
    } else {
        minutes
    }
}
