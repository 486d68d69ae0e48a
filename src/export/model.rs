// src/export/model.rs

use crate::core::calculator::report::ReportGroup;
use crate::models::entry::LogbookEntry;
use crate::utils::date::format_date_human;
use crate::utils::time::{format_time_12h, round2};
use serde::Serialize;

/// One report line: the fixed Date / Work Description / Start / End / Hours columns.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Work Description")]
    pub work_description: String,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Hours")]
    pub hours: f64,
}

impl From<&LogbookEntry> for ReportRow {
    fn from(e: &LogbookEntry) -> Self {
        Self {
            date: e.date.map(format_date_human).unwrap_or_default(),
            work_description: e.work_description.clone(),
            start_time: e.start_time.map(format_time_12h).unwrap_or_default(),
            end_time: e.end_time.map(format_time_12h).unwrap_or_default(),
            hours: round2(e.billable_hours()),
        }
    }
}

/// Header labels, in column order.
pub(crate) fn get_headers() -> [&'static str; 5] {
    ["Date", "Work Description", "Start Time", "End Time", "Hours"]
}

/// Rows of one group, in the group's entry order.
pub fn group_rows(group: &ReportGroup) -> Vec<ReportRow> {
    group.entries.iter().map(ReportRow::from).collect()
}
