use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::{HistoryFilter, ListLogic};
use crate::errors::AppResult;
use crate::models::entry::LogbookEntry;
use crate::utils::colors::{colorize_adjusted, colorize_optional};
use crate::utils::date::parse_range;
use crate::utils::formatting::truncate;
use crate::utils::table::Table;
use crate::utils::time::format_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        search,
        details,
    } = cmd
    {
        let bounds = match period.as_deref() {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_range(p)?),
        };

        let store = open_store(cfg)?;
        let entries = ListLogic::history(
            &store,
            &cfg.user,
            &HistoryFilter {
                bounds,
                search: search.clone(),
            },
        )?;

        if entries.is_empty() {
            if search.is_some() {
                println!("No logbook entries found matching your search.");
            } else {
                println!("No logbook entries yet. Start documenting your daily work!");
            }
            return Ok(());
        }

        print_entries(&entries, cfg.separator());
        if *details {
            print_details(&entries);
        }
    }
    Ok(())
}

fn print_entries(entries: &[LogbookEntry], separator: char) {
    let mut table = Table::new(
        vec!["ID", "DATE", "WK", "MONTH", "IN", "OUT", "LUNCH", "HOURS", "DESCRIPTION"],
        separator,
    );

    for e in entries {
        let lunch = if e.has_lunch_break {
            format!("{:.2}h", e.lunch_break_hours)
        } else {
            "-".to_string()
        };

        table.add_row(vec![
            e.id.to_string(),
            e.date_str(),
            e.week.map(|w| w.to_string()).unwrap_or_default(),
            e.month.clone().unwrap_or_default(),
            colorize_adjusted(&format_optional_time(e.start_time), e.was_adjusted),
            colorize_optional(&format_optional_time(e.end_time)),
            colorize_optional(&lunch),
            format!("{:.2}", e.billable_hours()),
            truncate(&e.work_description, 50),
        ]);
    }

    print!("{}", table.render());

    if entries.iter().any(|e| e.was_adjusted) {
        println!("* start credited from the scheduled time-in (grace window)");
    }
}

fn print_details(entries: &[LogbookEntry]) {
    for e in entries
        .iter()
        .filter(|e| !e.learnings.is_empty() || !e.issues.is_empty())
    {
        println!("\n{} ({})", e.date_str(), e.id);
        if !e.learnings.is_empty() {
            println!("  Learnings: {}", e.learnings);
        }
        if !e.issues.is_empty() {
            println!("  Issues: {}", e.issues);
        }
    }
}
