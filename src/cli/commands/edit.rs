use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EntryUpdate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date: date_str,
        week,
        start,
        end,
        desc,
        learnings,
        issues,
    } = cmd
    {
        let d = match date_str {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let update = EntryUpdate {
            date: d,
            week: *week,
            start_time: parse_optional_time(start.as_ref())?,
            end_time: parse_optional_time(end.as_ref())?,
            work_description: desc.clone(),
            learnings: learnings.clone(),
            issues: issues.clone(),
        };

        let mut store = open_store(cfg)?;
        let entry = EditLogic::apply(&mut store, &cfg.user, *id, update)?;

        success(format!(
            "✏️ Entry {} updated: {} = {:.2}h.",
            entry.id,
            entry.date_str(),
            entry.billable_hours()
        ));
    }

    Ok(())
}
