use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Per-user attendance policy read by the hours calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSettings {
    #[serde(with = "super::hhmm")]
    pub scheduled_time_in: NaiveTime,
    pub grace_window_minutes: u32,
}

impl Default for AttendanceSettings {
    fn default() -> Self {
        Self {
            scheduled_time_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN),
            grace_window_minutes: 30,
        }
    }
}
