//! Formatting utilities used for CLI outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Decimal hours as "08h 15m".
pub fn hours2readable(hours: f64) -> String {
    let total = (hours.max(0.0) * 60.0).round() as i64;
    format!("{:02}h {:02}m", total / 60, total % 60)
}

/// Cut a string to `max` visible chars, appending "..." when truncated.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
