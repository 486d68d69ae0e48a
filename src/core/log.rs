use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_operation};
use crate::utils::formatting::{pad_right, truncate};

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool, _cfg: &Config) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);

        let op_targets: Vec<String> = rows
            .iter()
            .map(|r| {
                let op_target = if r.target.is_empty() {
                    r.operation.clone()
                } else {
                    format!("{} ({})", r.operation, r.target)
                };
                truncate(&op_target, 60)
            })
            .collect();
        let op_w = op_targets.iter().map(|s| s.chars().count()).max().unwrap_or(10);

        for (row, op_target) in rows.iter().zip(op_targets) {
            let color = color_for_operation(&row.operation);
            println!(
                "{:>id_w$}: {:<date_w$} | {}{}{} => {}",
                row.id,
                row.date,
                color,
                pad_right(&op_target, op_w),
                RESET,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
