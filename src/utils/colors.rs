/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Grey placeholders ("--:--", empty), plain text otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Yellow marker for starts moved back to the scheduled time-in.
pub fn colorize_adjusted(value: &str, was_adjusted: bool) -> String {
    if was_adjusted {
        format!("{YELLOW}{value}*{RESET}")
    } else {
        value.to_string()
    }
}

/// Color for an operation name in the internal log.
pub fn color_for_operation(op: &str) -> &'static str {
    match op {
        "add" | "clock_in" => GREEN,
        "del" => RED,
        "edit" | "clock_out" => YELLOW,
        "settings" | "profile" => CYAN,
        "init" | "migration_applied" => MAGENTA,
        _ => RESET,
    }
}
