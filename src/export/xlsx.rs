// src/export/xlsx.rs

use crate::core::calculator::report::ReportGroup;
use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, group_rows};
use crate::export::notify_export_success;
use crate::models::profile::UserProfile;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;

/// Widths of DATE / Work Description / Start / End / Hours.
const COLUMN_WIDTHS: [f64; 5] = [15.0, 50.0, 12.0, 12.0, 10.0];

struct Styles {
    company: Format,
    label: Format,
    value: Format,
    header: Format,
    text: Format,
    hours: Format,
}

impl Styles {
    fn new() -> Self {
        let centered = Format::new()
            .set_font_size(10.0)
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        Self {
            company: Format::new()
                .set_bold()
                .set_font_size(16.0)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            label: Format::new()
                .set_bold()
                .set_font_size(11.0)
                .set_background_color(Color::RGB(0xE7E6E6))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            header: Format::new()
                .set_bold()
                .set_font_size(14.0)
                .set_font_color(Color::RGB(0xFFFFFF))
                .set_background_color(Color::RGB(0x4472C4))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            text: Format::new()
                .set_font_size(10.0)
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Top)
                .set_text_wrap(),
            hours: centered.clone().set_num_format("0.00"),
            value: centered,
        }
    }
}

/// One worksheet per report group, in group order.
pub(crate) fn export_xlsx(groups: &[ReportGroup], profile: UserProfile, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let styles = Styles::new();

    for group in groups {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(sheet_name(group))
            .map_err(to_export_error)?;
        write_group_sheet(worksheet, group, &profile, &styles)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_group_sheet(
    ws: &mut Worksheet,
    group: &ReportGroup,
    profile: &UserProfile,
    styles: &Styles,
) -> AppResult<()> {
    // Company banner
    ws.merge_range(0, 0, 0, 4, &profile.company_name, &styles.company)
        .map_err(to_export_error)?;
    ws.set_row_height(0, 25).map_err(to_export_error)?;

    // Trainee identity
    let mut row = 2;
    let labels = ["Lastname", "Firstname", "M.I.", "Program", "Section"];
    let values = [
        &profile.last_name,
        &profile.first_name,
        &profile.middle_initial,
        &profile.program,
        &profile.section,
    ];
    write_label_value_rows(ws, row, &labels, &values, styles)?;

    // Assignment and totals
    row += 3;
    ws.merge_range(row, 0, row, 1, "Assigned Task / Designated Position", &styles.label)
        .map_err(to_export_error)?;
    for (col, label) in [(2u16, "Week"), (3, "Month"), (4, "Total Hours")] {
        ws.write_with_format(row, col, label, &styles.label)
            .map_err(to_export_error)?;
    }
    ws.set_row_height(row, 20).map_err(to_export_error)?;

    row += 1;
    ws.merge_range(row, 0, row, 1, &profile.assigned_task, &styles.value)
        .map_err(to_export_error)?;
    ws.write_with_format(row, 2, format!("Week {}", group.week), &styles.value)
        .map_err(to_export_error)?;
    ws.write_with_format(row, 3, &group.month, &styles.value)
        .map_err(to_export_error)?;
    ws.write_with_format(row, 4, group.total_hours_rounded(), &styles.hours)
        .map_err(to_export_error)?;

    // Detailed log
    row += 2;
    let mut headers = get_headers();
    headers[0] = "DATE";
    headers[1] = "Work (Task) Description";
    for (col, header) in headers.iter().enumerate() {
        ws.write_with_format(row, col as u16, *header, &styles.header)
            .map_err(to_export_error)?;
    }
    ws.set_row_height(row, 25).map_err(to_export_error)?;

    for r in group_rows(group) {
        row += 1;
        ws.write_with_format(row, 0, &r.date, &styles.value)
            .map_err(to_export_error)?;
        ws.write_with_format(row, 1, &r.work_description, &styles.text)
            .map_err(to_export_error)?;
        ws.write_with_format(row, 2, &r.start_time, &styles.value)
            .map_err(to_export_error)?;
        ws.write_with_format(row, 3, &r.end_time, &styles.value)
            .map_err(to_export_error)?;
        ws.write_with_format(row, 4, r.hours, &styles.hours)
            .map_err(to_export_error)?;
        ws.set_row_height(row, 20).map_err(to_export_error)?;
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        ws.set_column_width(col as u16, *width)
            .map_err(to_export_error)?;
    }

    Ok(())
}

fn write_label_value_rows(
    ws: &mut Worksheet,
    row: u32,
    labels: &[&str],
    values: &[&String],
    styles: &Styles,
) -> AppResult<()> {
    for (col, (label, value)) in labels.iter().zip(values).enumerate() {
        ws.write_with_format(row, col as u16, *label, &styles.label)
            .map_err(to_export_error)?;
        ws.write_with_format(row + 1, col as u16, value.as_str(), &styles.value)
            .map_err(to_export_error)?;
    }
    ws.set_row_height(row, 20).map_err(to_export_error)?;
    Ok(())
}

/// Excel caps sheet names at 31 chars and forbids `[]:*?/\`.
fn sheet_name(group: &ReportGroup) -> String {
    group
        .title()
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(31)
        .collect()
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
