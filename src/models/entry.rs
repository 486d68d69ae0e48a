use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One logged work shift.
///
/// Entries written by this crate always carry every field; the optional ones
/// exist because a stored collection may hold partial records (older or
/// imported data), which reports skip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogbookEntry {
    pub id: i64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub week: Option<u8>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default, with = "super::hhmm::option")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "super::hhmm::option")]
    pub end_time: Option<NaiveTime>,
    #[serde(default, with = "super::hhmm::option")]
    pub adjusted_start_time: Option<NaiveTime>,
    #[serde(default)]
    pub was_adjusted: bool,
    #[serde(default)]
    pub hours: Option<f64>,
    /// Generic hours-like field, read when `hours` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub has_lunch_break: bool,
    #[serde(default)]
    pub lunch_break_hours: f64,
    #[serde(default)]
    pub work_description: String,
    #[serde(default)]
    pub learnings: String,
    #[serde(default)]
    pub issues: String,
    #[serde(default)]
    pub created_at: String,
}

impl LogbookEntry {
    /// Hours counted in totals: `hours`, else `totalHours`, else 0.
    pub fn billable_hours(&self) -> f64 {
        self.hours.or(self.total_hours).unwrap_or(0.0)
    }

    /// Date and both times are present.
    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.start_time.is_some() && self.end_time.is_some()
    }

    /// Stored week when declared (1..), `None` when missing or zero.
    pub fn declared_week(&self) -> Option<u8> {
        self.week.filter(|w| *w > 0)
    }

    /// Stored month name when non-empty.
    pub fn declared_month(&self) -> Option<&str> {
        self.month.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }

    /// Case-insensitive match on date, description, learnings or issues.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.date_str().contains(needle)
            || [&self.work_description, &self.learnings, &self.issues]
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }

    pub fn date_str(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}
