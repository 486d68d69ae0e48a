use crate::core::calculator::shift::compute_shift_with;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::entry::LogbookEntry;
use crate::utils::date::{month_name, week_of_month};
use chrono::{Local, NaiveDate, NaiveTime};

/// Raw form fields for a new logbook entry.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub date: Option<NaiveDate>,
    /// Declared week of month; derived from the date when absent.
    pub week: Option<u8>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub work_description: String,
    pub learnings: String,
    pub issues: String,
    /// `Some` when the shift had a lunch break.
    pub lunch_break_hours: Option<f64>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate, guard against duplicate dates, compute hours and persist.
    ///
    /// On any error the stored collection is left untouched.
    pub fn apply<S: Store + ?Sized>(
        store: &mut S,
        user: &str,
        input: NewEntry,
    ) -> AppResult<LogbookEntry> {
        let date = input.date.ok_or(AppError::MissingField("date"))?;
        let start = input.start_time.ok_or(AppError::MissingField("start time"))?;
        let end = input.end_time.ok_or(AppError::MissingField("end time"))?;

        let description = input.work_description.trim();
        if description.is_empty() {
            return Err(AppError::MissingField("work description"));
        }

        let week = match input.week {
            Some(w) => validate_week(w)?,
            // a sixth calendar row still files under week 5
            None => week_of_month(date).min(5),
        };

        let lunch = match input.lunch_break_hours {
            Some(h) => Some(validate_lunch(h)?),
            None => None,
        };

        let mut entries = store.load_entries(user)?;

        if entries.iter().any(|e| e.date == Some(date)) {
            return Err(AppError::DuplicateDate(date));
        }

        let settings = store.load_settings(user)?;
        let calc = compute_shift_with(&settings, Some(start), Some(end), lunch.unwrap_or(0.0));

        let entry = LogbookEntry {
            id: next_id(&entries),
            date: Some(date),
            week: Some(week),
            month: Some(month_name(date)),
            start_time: Some(start),
            end_time: Some(end),
            adjusted_start_time: calc.adjusted_start_time,
            was_adjusted: calc.was_adjusted,
            hours: Some(calc.rounded_hours()),
            total_hours: None,
            has_lunch_break: lunch.is_some(),
            lunch_break_hours: lunch.unwrap_or(0.0),
            work_description: description.to_string(),
            learnings: input.learnings.trim().to_string(),
            issues: input.issues.trim().to_string(),
            created_at: Local::now().to_rfc3339(),
        };

        entries.push(entry.clone());
        store.save_entries(user, &entries)?;

        store.audit(
            "add",
            &entry.date_str(),
            &format!("{:.2}h (week {}, id {})", entry.billable_hours(), week, entry.id),
        )?;
        tracing::info!(user, id = entry.id, date = %date, hours = entry.billable_hours(), "entry added");

        Ok(entry)
    }
}

pub(crate) fn validate_week(week: u8) -> AppResult<u8> {
    if (1..=5).contains(&week) {
        Ok(week)
    } else {
        Err(AppError::InvalidWeek(week.to_string()))
    }
}

fn validate_lunch(hours: f64) -> AppResult<f64> {
    if hours.is_finite() && hours >= 0.0 {
        Ok(hours)
    } else {
        Err(AppError::InvalidLunchBreak(hours.to_string()))
    }
}

/// Creation timestamp in ms, bumped past the highest existing id.
fn next_id(entries: &[LogbookEntry]) -> i64 {
    let now = Local::now().timestamp_millis();
    let max = entries.iter().map(|e| e.id).max().unwrap_or(0);
    now.max(max + 1)
}
