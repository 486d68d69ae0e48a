use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, AttendanceStatus};
use crate::utils::time::round2;
use chrono::{Duration, Local, NaiveDate, NaiveTime};

pub struct AttendanceLogic;

impl AttendanceLogic {
    /// Open a new attendance record. Fails while another one is still open.
    pub fn clock_in<S: Store + ?Sized>(
        store: &mut S,
        user: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> AppResult<AttendanceRecord> {
        let mut records = store.load_attendance(user)?;

        if let Some(open) = records.iter().rev().find(|r| r.is_open()) {
            return Err(AppError::AlreadyClockedIn(format!(
                "{} {}",
                open.date,
                open.time_in.format("%H:%M")
            )));
        }

        let now = Local::now().timestamp_millis();
        let id = records.iter().map(|r| r.id + 1).max().unwrap_or(0).max(now);

        let record = AttendanceRecord {
            id,
            date,
            time_in: time,
            time_out: None,
            total_hours: None,
            status: AttendanceStatus::TimeInOnly,
        };

        records.push(record.clone());
        store.save_attendance(user, &records)?;
        store.audit("clock_in", &date.to_string(), &time.format("%H:%M").to_string())?;

        Ok(record)
    }

    /// Close the most recent open record.
    ///
    /// A clock-out at or before the clock-in moment counts as the next day;
    /// one still at or before it after that rollover is rejected.
    pub fn clock_out<S: Store + ?Sized>(
        store: &mut S,
        user: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> AppResult<AttendanceRecord> {
        let mut records = store.load_attendance(user)?;

        let idx = records
            .iter()
            .rposition(AttendanceRecord::is_open)
            .ok_or(AppError::NoOpenAttendance)?;

        let record = &mut records[idx];
        let time_in = record.date.and_time(record.time_in);
        let mut time_out = date.and_time(time);
        if time_out <= time_in {
            time_out += Duration::days(1);
        }
        if time_out <= time_in {
            return Err(AppError::InvalidDate(format!(
                "clock-out {} {} is before clock-in {} {}",
                date,
                time.format("%H:%M"),
                record.date,
                record.time_in.format("%H:%M")
            )));
        }

        let hours = (time_out - time_in).num_minutes() as f64 / 60.0;
        record.time_out = Some(time);
        record.total_hours = Some(round2(hours));
        record.status = AttendanceStatus::Present;

        let closed = record.clone();
        store.save_attendance(user, &records)?;
        store.audit(
            "clock_out",
            &closed.date.to_string(),
            &format!("{:.2}h", closed.total_hours.unwrap_or(0.0)),
        )?;

        Ok(closed)
    }

    pub fn list<S: Store + ?Sized>(store: &S, user: &str) -> AppResult<Vec<AttendanceRecord>> {
        let mut records = store.load_attendance(user)?;
        records.sort_by(|a, b| (b.date, b.time_in).cmp(&(a.date, a.time_in)));
        Ok(records)
    }
}
