use crate::core::calculator::report::ReportGroup;
use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, group_rows};
use crate::export::notify_export_success;
use std::path::Path;

/// One CSV row per entry, sections in report order, prefixed by month and week.
pub(crate) fn export_csv(groups: &[ReportGroup], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    let mut header = vec!["Month", "Week"];
    header.extend(get_headers());
    wtr.write_record(&header)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for group in groups {
        let week = group.week.to_string();
        for row in group_rows(group) {
            let hours = format!("{:.2}", row.hours);
            wtr.write_record([
                group.month.as_str(),
                week.as_str(),
                row.date.as_str(),
                row.work_description.as_str(),
                row.start_time.as_str(),
                row.end_time.as_str(),
                hours.as_str(),
            ])
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
        }
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}
