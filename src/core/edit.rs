use crate::core::add::validate_week;
use crate::core::calculator::shift::raw_shift_hours;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::entry::LogbookEntry;
use crate::utils::date::month_name;
use crate::utils::time::round2;
use chrono::{NaiveDate, NaiveTime};

/// Replacement values; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub date: Option<NaiveDate>,
    pub week: Option<u8>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub work_description: Option<String>,
    pub learnings: Option<String>,
    pub issues: Option<String>,
}

pub struct EditLogic;

impl EditLogic {
    /// Replace the editable fields of entry `id`.
    ///
    /// Hours are recomputed from the raw start/end only: the grace window and
    /// the lunch break recorded at creation are not applied again.
    pub fn apply<S: Store + ?Sized>(
        store: &mut S,
        user: &str,
        id: i64,
        update: EntryUpdate,
    ) -> AppResult<LogbookEntry> {
        let mut entries = store.load_entries(user)?;

        let idx = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(AppError::EntryNotFound(id))?;

        if let Some(date) = update.date
            && entries.iter().any(|e| e.id != id && e.date == Some(date))
        {
            return Err(AppError::DuplicateDate(date));
        }

        let week = update.week.map(validate_week).transpose()?;

        let mut entry = entries[idx].clone();

        if let Some(date) = update.date {
            entry.date = Some(date);
        }
        if let Some(w) = week {
            entry.week = Some(w);
        }
        if let Some(start) = update.start_time {
            entry.start_time = Some(start);
        }
        if let Some(end) = update.end_time {
            entry.end_time = Some(end);
        }
        if let Some(desc) = update.work_description {
            let desc = desc.trim();
            if desc.is_empty() {
                return Err(AppError::MissingField("work description"));
            }
            entry.work_description = desc.to_string();
        }
        if let Some(learnings) = update.learnings {
            entry.learnings = learnings.trim().to_string();
        }
        if let Some(issues) = update.issues {
            entry.issues = issues.trim().to_string();
        }

        entry.month = entry.date.map(month_name);
        entry.adjusted_start_time = entry.start_time;
        entry.was_adjusted = false;
        entry.hours = Some(round2(raw_shift_hours(entry.start_time, entry.end_time)));

        entries[idx] = entry.clone();
        store.save_entries(user, &entries)?;

        store.audit(
            "edit",
            &entry.date_str(),
            &format!("id {} now {:.2}h", entry.id, entry.billable_hours()),
        )?;
        tracing::info!(user, id, "entry edited");

        Ok(entry)
    }
}
