use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::shift::{compute_shift_with, raw_shift_hours};
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::utils::time::{format_optional_time, parse_optional_time};

/// Show what `add` would compute, without saving.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview { start, end, lunch } = cmd {
        let start_t = parse_optional_time(start.as_ref())?;
        let end_t = parse_optional_time(end.as_ref())?;

        let store = open_store(cfg)?;
        let settings = store.load_settings(&cfg.user)?;

        let lunch_h = lunch.unwrap_or(0.0);
        let calc = compute_shift_with(&settings, start_t, end_t, lunch_h);

        println!("🧮 Total: {:.2} hours", calc.hours);

        if lunch.is_some() {
            let before_lunch = compute_shift_with(&settings, start_t, end_t, 0.0);
            println!(
                "   ({:.2}h - {:.2}h lunch break)",
                before_lunch.hours,
                lunch_h.max(0.0)
            );
        }

        if calc.was_adjusted {
            println!(
                "   Start adjusted to {} (clock-in {} is within the {} min grace window)",
                format_optional_time(calc.adjusted_start_time),
                format_optional_time(start_t),
                settings.grace_window_minutes
            );
        } else if start_t.is_some() && end_t.is_some() {
            println!("   Raw duration: {:.2}h", raw_shift_hours(start_t, end_t));
        }
    }

    Ok(())
}
