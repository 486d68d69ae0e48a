use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    TimeInOnly,
    Present,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::TimeInOnly => "time-in-only",
            AttendanceStatus::Present => "present",
        }
    }
}

/// A clock-in / clock-out pair recorded from the attendance command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(with = "super::hhmm")]
    pub time_in: NaiveTime,
    #[serde(default, with = "super::hhmm::option")]
    pub time_out: Option<NaiveTime>,
    #[serde(default)]
    pub total_hours: Option<f64>,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn is_open(&self) -> bool {
        self.status == AttendanceStatus::TimeInOnly
    }
}
