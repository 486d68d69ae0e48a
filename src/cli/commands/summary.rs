use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::{relative_date, today};
use crate::utils::formatting::truncate;
use crate::utils::hours2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { recent } = cmd {
        let store = open_store(cfg)?;
        let summary = SummaryLogic::build(&store, &cfg.user, *recent)?;

        header("Dashboard");
        println!(
            "⏱️  Total hours : {:.2} ({})",
            summary.total_hours,
            hours2readable(summary.total_hours)
        );
        println!("📅 Days logged : {}", summary.total_days);
        println!("⏳ Grace-window adjusted : {}", summary.adjusted_days);

        if !summary.recent.is_empty() {
            println!("\nRecent entries:");
            let now = today();
            for e in &summary.recent {
                let when = e.date.map(|d| relative_date(d, now)).unwrap_or_default();
                println!(
                    "  {:<14} {:>6.2}h  {}",
                    when,
                    e.billable_hours(),
                    truncate(&e.work_description, 60)
                );
            }
        }
    }
    Ok(())
}
