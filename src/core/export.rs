use crate::core::calculator::report::{ReportGroup, group_for_report};
use crate::core::list::{HistoryFilter, filter_entries};
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ensure_writable, write_report};
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the user's logbook as grouped report sections.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a period such as `YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, or `start:end` of the same shape
    ///
    /// Returns the groups written (empty when nothing matched).
    pub fn export<S: Store + ?Sized>(
        store: &S,
        user: &str,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<Vec<ReportGroup>> {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let profile = store.load_profile(user)?;
        if format.needs_profile() && profile.is_none() {
            return Err(AppError::MissingProfile);
        }

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let entries = filter_entries(
            store.load_entries(user)?,
            &HistoryFilter {
                bounds,
                search: None,
            },
        );
        let groups = group_for_report(&entries);

        if groups.is_empty() {
            warning("No logbook entries found for the selected range. Nothing to export.");
            return Ok(groups);
        }

        ensure_writable(path, force)?;
        write_report(format, &groups, profile.as_ref(), path)?;

        tracing::info!(
            user,
            format = format.as_str(),
            sections = groups.len(),
            path = %path.display(),
            "report exported"
        );
        Ok(groups)
    }
}
