use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsLogic;
use crate::errors::{AppError, AppResult};
use crate::models::settings::AttendanceSettings;
use crate::ui::messages::success;
use crate::utils::time::parse_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings { time_in, grace } = cmd {
        let mut store = open_store(cfg)?;

        if let (Some(t), Some(g)) = (time_in, grace) {
            let scheduled = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone()))?;
            SettingsLogic::save(
                &mut store,
                &cfg.user,
                AttendanceSettings {
                    scheduled_time_in: scheduled,
                    grace_window_minutes: *g,
                },
            )?;
            success(format!(
                "Settings saved: time-in {}, grace window {} min.",
                scheduled.format("%H:%M"),
                g
            ));
            return Ok(());
        }

        let s = SettingsLogic::show(&store, &cfg.user)?;
        println!("⏰ Scheduled time-in : {}", s.scheduled_time_in.format("%H:%M"));
        println!("⏳ Grace window      : {} min", s.grace_window_minutes);
    }

    Ok(())
}
