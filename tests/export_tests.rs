mod common;
use common::{init_db_with_data, ojt, save_profile, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_export_csv_groups_in_report_order() {
    let db_path = setup_test_db("export_csv_order");
    init_db_with_data(&db_path, "alice");

    let out = temp_out("export_csv_order", "csv");

    ojt()
        .args([
            "--db", &db_path, "--user", "alice", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("Month,Week,Date,Work Description,Start Time,End Time,Hours")
    );

    let body: Vec<&str> = lines.collect();
    assert_eq!(body.len(), 3);
    assert!(body[0].starts_with("March,2,\"Mar 10, 2025\",Data entry,8:20 AM,5:00 PM,8.00"));
    assert!(body[1].starts_with("March,4,\"Mar 24, 2025\""));
    assert!(body[2].starts_with("April,1,\"Apr 1, 2025\""));
}

#[test]
fn test_export_json_range() {
    let db_path = setup_test_db("export_json_range");
    init_db_with_data(&db_path, "alice");

    let out = temp_out("export_json_range", "json");

    ojt()
        .args([
            "--db", &db_path, "--user", "alice", "export", "--format", "json", "--file", &out,
            "--range", "2025-03",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let sections: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let sections = sections.as_array().expect("array of sections");

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0]["title"], "March Week 2");
    assert_eq!(sections[0]["totalHours"], 8.0);
    assert_eq!(sections[1]["title"], "March Week 4");
    assert_eq!(sections[1]["rows"][0]["Date"], "Mar 24, 2025");
    assert!(!content.contains("April"));
}

#[test]
fn test_export_xlsx_requires_profile() {
    let db_path = setup_test_db("export_xlsx_profile");
    init_db_with_data(&db_path, "alice");

    let out = temp_out("export_xlsx_profile", "xlsx");

    ojt()
        .args(["--db", &db_path, "--user", "alice", "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("missing_profile"));
    assert!(!Path::new(&out).exists());

    save_profile(&db_path, "alice");

    ojt()
        .args(["--db", &db_path, "--user", "alice", "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read exported xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty_range");
    init_db_with_data(&db_path, "alice");

    let out = temp_out("export_empty_range", "csv");

    ojt()
        .args([
            "--db", &db_path, "--user", "alice", "export", "--format", "csv", "--file", &out,
            "--range", "2024",
        ])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_data(&db_path, "alice");

    ojt()
        .args([
            "--db", &db_path, "--user", "alice", "export", "--format", "csv", "--file",
            "report.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path, "alice");

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("seed file");

    ojt()
        .args([
            "--db", &db_path, "--user", "alice", "export", "--format", "csv", "--file", &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("Month,Week"));
}
