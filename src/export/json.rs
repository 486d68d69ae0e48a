use crate::core::calculator::report::ReportGroup;
use crate::errors::AppResult;
use crate::export::model::{ReportRow, group_rows};
use crate::export::notify_export_success;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSection {
    title: String,
    month: String,
    week: u8,
    total_hours: f64,
    rows: Vec<ReportRow>,
}

/// Pretty-printed JSON array of report sections.
pub(crate) fn export_json(groups: &[ReportGroup], path: &Path) -> AppResult<()> {
    let sections: Vec<JsonSection> = groups
        .iter()
        .map(|g| JsonSection {
            title: g.title(),
            month: g.month.clone(),
            week: g.week,
            total_hours: g.total_hours_rounded(),
            rows: group_rows(g),
        })
        .collect();

    std::fs::write(path, serde_json::to_string_pretty(&sections)?)?;
    notify_export_success("JSON", path);
    Ok(())
}
