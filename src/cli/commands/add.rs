use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, NewEntry};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date::parse_date;
use crate::utils::time::{format_optional_time, parse_time};

/// Add a logbook entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        week,
        start,
        end,
        desc,
        lunch,
        learnings,
        issues,
    } = cmd
    {
        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start_t = parse_time(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
        let end_t = parse_time(end).ok_or_else(|| AppError::InvalidTime(end.to_string()))?;

        let mut store = open_store(cfg)?;

        let entry = AddLogic::apply(
            &mut store,
            &cfg.user,
            NewEntry {
                date: Some(d),
                week: *week,
                start_time: Some(start_t),
                end_time: Some(end_t),
                work_description: desc.clone(),
                learnings: learnings.clone().unwrap_or_default(),
                issues: issues.clone().unwrap_or_default(),
                lunch_break_hours: *lunch,
            },
        )?;

        success(format!(
            "Added entry on {} (week {}): {} → {} = {:.2}h.",
            entry.date_str(),
            entry.week.unwrap_or_default(),
            format_optional_time(entry.start_time),
            format_optional_time(entry.end_time),
            entry.billable_hours()
        ));

        if entry.was_adjusted {
            info(format!(
                "Start time adjusted to {} (within grace window).",
                format_optional_time(entry.adjusted_start_time)
            ));
        }
    }

    Ok(())
}
