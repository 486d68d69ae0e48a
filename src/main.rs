//! ojtlog main entrypoint.

use ojtlog::ui::messages::{error, info};
use ojtlog::{LOG_ENV, run};

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("[{}] {}", e.code(), e));
        if !e.is_validation() {
            info(format!("Set {LOG_ENV}=debug for diagnostic output."));
        }
        std::process::exit(1);
    }
}
