//! Month/week grouping of logbook entries for reports.

use crate::models::entry::LogbookEntry;
use crate::utils::date::{month_index, month_name, week_of_month};
use crate::utils::time::round2;
use serde::Serialize;

/// One report section: every entry of a (month, week) bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportGroup {
    pub month: String,
    pub week: u8,
    pub entries: Vec<LogbookEntry>,
    /// Unrounded sum of the entries' hours.
    pub total_hours: f64,
}

impl ReportGroup {
    pub fn total_hours_rounded(&self) -> f64 {
        round2(self.total_hours)
    }

    /// Section / sheet title, e.g. "March Week 2".
    pub fn title(&self) -> String {
        format!("{} Week {}", self.month, self.week)
    }

    fn month_order(&self) -> u32 {
        month_index(&self.month).unwrap_or(12)
    }
}

/// Group complete entries by (month, week), ordered for report generation.
///
/// Entries missing date, start or end time are left out. The stored month and
/// week win over the ones derived from the date. Groups come out in calendar
/// month order, then by week; entries inside a group ascend by date.
pub fn group_for_report(entries: &[LogbookEntry]) -> Vec<ReportGroup> {
    let mut groups: Vec<ReportGroup> = Vec::new();

    for entry in entries.iter().filter(|e| e.is_complete()) {
        let Some(date) = entry.date else { continue };

        let month = entry
            .declared_month()
            .map(str::to_string)
            .unwrap_or_else(|| month_name(date));
        let week = entry.declared_week().unwrap_or_else(|| week_of_month(date));

        match groups
            .iter_mut()
            .find(|g| g.month == month && g.week == week)
        {
            Some(group) => group.entries.push(entry.clone()),
            None => groups.push(ReportGroup {
                month,
                week,
                entries: vec![entry.clone()],
                total_hours: 0.0,
            }),
        }
    }

    for group in &mut groups {
        group.entries.sort_by_key(|e| e.date);
        group.total_hours = group.entries.iter().map(LogbookEntry::billable_hours).sum();
    }

    groups.sort_by(|a, b| {
        a.month_order()
            .cmp(&b.month_order())
            .then(a.week.cmp(&b.week))
    });

    tracing::debug!(groups = groups.len(), "grouped logbook entries for report");
    groups
}
