// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod model;
mod xlsx;

pub use model::{ReportRow, group_rows};

use crate::core::calculator::report::ReportGroup;
use crate::errors::AppResult;
use crate::models::profile::UserProfile;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) use fs_utils::ensure_writable;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// XLSX sheets carry the profile header block.
    pub fn needs_profile(&self) -> bool {
        matches!(self, ExportFormat::Xlsx)
    }
}

/// Render grouped report sections to `path`.
pub fn write_report(
    format: ExportFormat,
    groups: &[ReportGroup],
    profile: Option<&UserProfile>,
    path: &Path,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => csv::export_csv(groups, path),
        ExportFormat::Json => json::export_json(groups, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(groups, profile.cloned().unwrap_or_default(), path),
    }
}
