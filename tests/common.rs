#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use ojtlog::models::entry::LogbookEntry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ojt() -> Command {
    cargo_bin_cmd!("ojtlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ojtlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// A complete stored entry, as `add` would write it.
pub fn entry(id: i64, date: &str, week: u8, month: &str, hours: f64) -> LogbookEntry {
    LogbookEntry {
        id,
        date: Some(d(date)),
        week: Some(week),
        month: Some(month.to_string()),
        start_time: Some(t("08:00")),
        end_time: Some(t("17:00")),
        adjusted_start_time: Some(t("08:00")),
        was_adjusted: false,
        hours: Some(hours),
        total_hours: None,
        has_lunch_break: false,
        lunch_break_hours: 0.0,
        work_description: format!("work on {date}"),
        learnings: String::new(),
        issues: String::new(),
        created_at: String::new(),
    }
}

/// Initialize the DB for `user` and add a small dataset (March and April 2025)
pub fn init_db_with_data(db_path: &str, user: &str) {
    ojt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (date, week, start, end) in [
        ("2025-04-01", "1", "08:00", "17:00"),
        ("2025-03-24", "4", "08:00", "17:00"),
        ("2025-03-10", "2", "08:20", "17:00"),
    ] {
        ojt()
            .args([
                "--db", db_path, "--user", user, "add", date, "--week", week, "--in", start,
                "--out", end, "--desc", "Data entry", "--lunch", "1",
            ])
            .assert()
            .success();
    }
}

/// Save a complete report profile for `user`
pub fn save_profile(db_path: &str, user: &str) {
    ojt()
        .args([
            "--db",
            db_path,
            "--user",
            user,
            "profile",
            "--company",
            "Acme Corp",
            "--last-name",
            "Dela Cruz",
            "--first-name",
            "Juan",
            "--middle-initial",
            "P",
            "--program",
            "BSIT",
            "--section",
            "4A",
            "--assigned-task",
            "IT Support",
        ])
        .assert()
        .success();
}
