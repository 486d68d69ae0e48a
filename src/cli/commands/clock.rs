use crate::cli::commands::open_store;
use crate::cli::parser::{ClockAction, Commands};
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::{format_date_long, parse_date};
use crate::utils::table::Table;
use crate::utils::time::{format_optional_time, format_time_12h, parse_time};
use chrono::{Local, NaiveDate, NaiveTime, Timelike};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock { action } = cmd {
        let mut store = open_store(cfg)?;

        match action {
            ClockAction::In { date, at } => {
                let (d, t) = resolve_moment(date.as_deref(), at.as_deref())?;
                AttendanceLogic::clock_in(&mut store, &cfg.user, d, t)?;
                success(format!("Time In: {} ({})", format_time_12h(t), format_date_long(d)));
            }
            ClockAction::Out { date, at } => {
                let (d, t) = resolve_moment(date.as_deref(), at.as_deref())?;
                let record = AttendanceLogic::clock_out(&mut store, &cfg.user, d, t)?;
                success(format!(
                    "Time Out: {} ({:.2}h since {})",
                    format_time_12h(t),
                    record.total_hours.unwrap_or(0.0),
                    format_time_12h(record.time_in)
                ));
            }
            ClockAction::List => {
                let records = AttendanceLogic::list(&store, &cfg.user)?;
                if records.is_empty() {
                    println!("No attendance records yet.");
                    return Ok(());
                }

                let mut table = Table::new(
                    vec!["DATE", "TIME IN", "TIME OUT", "HOURS", "STATUS"],
                    cfg.separator(),
                );
                for r in &records {
                    table.add_row(vec![
                        r.date.to_string(),
                        format_optional_time(Some(r.time_in)),
                        format_optional_time(r.time_out),
                        r.total_hours.map(|h| format!("{h:.2}")).unwrap_or_default(),
                        r.status.as_str().to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}

/// Explicit date/time, or the current local moment (to the minute).
fn resolve_moment(date_arg: Option<&str>, at: Option<&str>) -> AppResult<(NaiveDate, NaiveTime)> {
    let now = Local::now().naive_local();

    let d = match date_arg {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => now.date(),
    };

    let t = match at {
        Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?,
        None => NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now.time()),
    };

    Ok((d, t))
}
